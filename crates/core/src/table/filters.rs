//! Filter stage: free-text search plus categorical equality constraints

use std::collections::BTreeMap;

use super::types::CategoryFilter;
use crate::models::Record;

/// Search text combined (AND) with per-field category constraints
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Matched case-insensitively as a substring; not trimmed
    pub query: String,
    pub categories: BTreeMap<String, CategoryFilter>,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, field: impl Into<String>, filter: CategoryFilter) -> Self {
        self.set_category(field, filter);
        self
    }

    /// `All` removes the constraint instead of storing the sentinel
    pub fn set_category(&mut self, field: impl Into<String>, filter: CategoryFilter) {
        let field = field.into();
        if filter.is_all() {
            self.categories.remove(&field);
        } else {
            self.categories.insert(field, filter);
        }
    }

    pub fn category(&self, field: &str) -> &CategoryFilter {
        static ALL: CategoryFilter = CategoryFilter::All;
        self.categories.get(field).unwrap_or(&ALL)
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.categories.is_empty()
    }
}

/// Check a row against the criteria, with the query already lower-cased
fn row_matches<R: Record>(row: &R, query_lower: &str, criteria: &FilterCriteria) -> bool {
    if !query_lower.is_empty() && !row.searchable_text().contains(query_lower) {
        return false;
    }
    criteria.categories.iter().all(|(field, filter)| match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(value) => row.field(field).to_string() == *value,
    })
}

/// Does a single row pass the filter?
pub fn matches_criteria<R: Record>(row: &R, criteria: &FilterCriteria) -> bool {
    row_matches(row, &criteria.query.to_lowercase(), criteria)
}

/// Rows passing the filter, in input order
pub fn filter_rows<'a, R: Record>(rows: impl IntoIterator<Item = &'a R>, criteria: &FilterCriteria) -> Vec<&'a R>
where
    R: 'a,
{
    let query_lower = criteria.query.to_lowercase();
    rows.into_iter()
        .filter(|row| row_matches(*row, &query_lower, criteria))
        .collect()
}

/// Distinct display values of a field in first-seen order (feeds the category selectors)
pub fn unique_values<'a, R: Record + 'a>(rows: impl IntoIterator<Item = &'a R>, field: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        let value = row.field(field);
        if value.is_missing() {
            continue;
        }
        let value = value.to_string();
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DynamicRow;

    fn rows() -> Vec<DynamicRow> {
        vec![
            DynamicRow::new().with("id", 1i64).with("campaign", "Spring Launch").with("status", "Active"),
            DynamicRow::new().with("id", 2i64).with("campaign", "Holiday Promo").with("status", "Paused"),
            DynamicRow::new().with("id", 3i64).with("campaign", "Spring Clearance").with("status", "Paused"),
        ]
    }

    fn ids(rows: &[&DynamicRow]) -> Vec<String> {
        rows.iter().map(|r| r.field("id").to_string()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let data = rows();
        assert_eq!(filter_rows(&data, &FilterCriteria::default()).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let data = rows();
        let criteria = FilterCriteria::default().with_query("SPRING");
        assert_eq!(ids(&filter_rows(&data, &criteria)), vec!["1", "3"]);
    }

    #[test]
    fn test_numeric_fields_are_searchable() {
        let data = rows();
        let criteria = FilterCriteria::default().with_query("2");
        assert_eq!(ids(&filter_rows(&data, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let data = rows();
        // Only multi-word campaign names contain a space
        let criteria = FilterCriteria::default().with_query(" ");
        assert_eq!(filter_rows(&data, &criteria).len(), 3);
        let criteria = FilterCriteria::default().with_query("  ");
        assert!(filter_rows(&data, &criteria).is_empty());
    }

    #[test]
    fn test_category_and_query_are_conjunctive() {
        let data = rows();
        let criteria = FilterCriteria::default()
            .with_query("spring")
            .with_category("status", CategoryFilter::Only("Paused".to_string()));
        assert_eq!(ids(&filter_rows(&data, &criteria)), vec!["3"]);
    }

    #[test]
    fn test_category_all_removes_constraint() {
        let mut criteria = FilterCriteria::default().with_category("status", CategoryFilter::Only("Active".into()));
        criteria.set_category("status", CategoryFilter::All);
        assert!(criteria.categories.is_empty());
        assert!(!criteria.is_active());
        assert_eq!(criteria.category("status"), &CategoryFilter::All);
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<DynamicRow> = Vec::new();
        assert!(filter_rows(&data, &FilterCriteria::default().with_query("x")).is_empty());
    }

    #[test]
    fn test_unique_values_first_seen_order() {
        let data = rows();
        assert_eq!(unique_values(&data, "status"), vec!["Active", "Paused"]);
        assert!(unique_values(&data, "missing").is_empty());
    }
}
