//! Sort stage

use std::cmp::Ordering;

use super::types::{SortCriteria, SortDirection};
use crate::models::{FieldValue, Record};

/// Comparison key for one cell, built once per sort pass
///
/// A column is compared as text when any of its values is text, and
/// numerically otherwise, so one pass never mixes the two orders.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Keys for a whole column; `Missing` is "" in a text column and zero in a numeric one
fn column_keys<'v>(values: impl IntoIterator<Item = &'v FieldValue> + Clone) -> Vec<SortKey> {
    let as_text = values.clone().into_iter().any(FieldValue::is_text);
    values
        .into_iter()
        .map(|value| {
            if as_text {
                SortKey::Text(value.to_string().to_lowercase())
            } else {
                SortKey::Number(value.as_f64().unwrap_or(0.0))
            }
        })
        .collect()
}

/// Compare two cell values the way a column holding just these two sorts
///
/// Text on either side compares both as lower-cased strings; otherwise numeric.
/// `Missing` renders as "" against text and counts as zero against numbers.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    let keys = column_keys([a, b]);
    keys[0].compare(&keys[1])
}

/// Order rows by the criteria, returning a new vector
///
/// `sort_by` is stable, so rows with equal keys keep their input order in both directions.
pub fn sort_rows<'a, R: Record>(rows: Vec<&'a R>, criteria: &SortCriteria) -> Vec<&'a R> {
    let values: Vec<FieldValue> = rows.iter().map(|row| row.field(&criteria.field)).collect();
    let mut keyed: Vec<(SortKey, &'a R)> = column_keys(&values).into_iter().zip(rows).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = a.compare(b);
        if criteria.direction == SortDirection::Descending { cmp.reverse() } else { cmp }
    });
    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DynamicRow;

    fn row(id: i64, name: &str, clicks: Option<i64>) -> DynamicRow {
        DynamicRow::new().with("id", id).with("name", name).with("clicks", clicks)
    }

    fn ids(rows: &[&DynamicRow]) -> Vec<i64> {
        rows.iter()
            .map(|r| match r.field("id") {
                FieldValue::Integer(v) => v,
                other => panic!("unexpected id {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_text_compare_ignores_case() {
        assert_eq!(compare_values(&"apple".into(), &"Banana".into()), Ordering::Less);
        assert_eq!(compare_values(&"ABC".into(), &"abc".into()), Ordering::Equal);
    }

    #[test]
    fn test_mixed_text_and_number_compare_as_strings() {
        // "10" < "9" lexicographically
        assert_eq!(compare_values(&FieldValue::Integer(10), &"9".into()), Ordering::Less);
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(compare_values(&FieldValue::Missing, &FieldValue::Integer(0)), Ordering::Equal);
        assert_eq!(compare_values(&FieldValue::Missing, &FieldValue::Integer(3)), Ordering::Less);
        assert_eq!(compare_values(&FieldValue::Missing, &"a".into()), Ordering::Less);
        assert_eq!(compare_values(&FieldValue::Missing, &FieldValue::Missing), Ordering::Equal);
    }

    #[test]
    fn test_numeric_sort_both_directions() {
        let data = vec![row(1, "a", Some(30)), row(2, "b", Some(10)), row(3, "c", Some(20))];
        let asc = sort_rows(data.iter().collect(), &SortCriteria::ascending("clicks"));
        assert_eq!(ids(&asc), vec![2, 3, 1]);
        let desc = sort_rows(
            data.iter().collect(),
            &SortCriteria { field: "clicks".into(), direction: SortDirection::Descending },
        );
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let data = vec![row(1, "Same", None), row(2, "same", None), row(3, "SAME", None)];
        let asc = sort_rows(data.iter().collect(), &SortCriteria::ascending("name"));
        assert_eq!(ids(&asc), vec![1, 2, 3]);
        let desc = sort_rows(
            data.iter().collect(),
            &SortCriteria { field: "name".into(), direction: SortDirection::Descending },
        );
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_does_not_touch_source() {
        let data = vec![row(2, "b", None), row(1, "a", None)];
        let sorted = sort_rows(data.iter().collect(), &SortCriteria::ascending("id"));
        assert_eq!(ids(&sorted), vec![1, 2]);
        assert_eq!(data[0].field("id"), FieldValue::Integer(2));
    }

    #[test]
    fn test_toggle_criteria() {
        let criteria = SortCriteria::default();
        let flipped = criteria.toggle("id");
        assert_eq!(flipped.direction, SortDirection::Descending);
        let other = flipped.toggle("campaign");
        assert_eq!(other, SortCriteria::ascending("campaign"));
    }

    fn mixed(id: i64, key: FieldValue) -> DynamicRow {
        DynamicRow::new().with("id", id).with("k", key)
    }

    #[test]
    fn test_mixed_column_sorts_as_text() {
        let data: Vec<DynamicRow> = (0..64i64)
            .map(|i| {
                let n = (i * 37) % 23 - 11;
                let key = match i % 4 {
                    0 => FieldValue::Integer(n),
                    1 => FieldValue::Text(n.to_string()),
                    2 => FieldValue::Missing,
                    _ => FieldValue::Integer(-n * 100),
                };
                mixed(i, key)
            })
            .collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let criteria = SortCriteria { field: "k".into(), direction };
            let sorted = sort_rows(data.iter().collect(), &criteria);
            assert_eq!(sorted.len(), data.len());
            let keys: Vec<String> = sorted.iter().map(|r| r.field("k").to_string().to_lowercase()).collect();
            let mut expected = keys.clone();
            expected.sort();
            if direction == SortDirection::Descending {
                expected.reverse();
            }
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_numeric_column_treats_missing_as_zero() {
        let data = vec![
            mixed(1, FieldValue::Float(2.5)),
            mixed(2, FieldValue::Missing),
            mixed(3, FieldValue::Integer(-4)),
            mixed(4, FieldValue::Float(f64::NAN)),
            mixed(5, FieldValue::Integer(0)),
        ];
        let sorted = sort_rows(data.iter().collect(), &SortCriteria::ascending("k"));
        assert_eq!(ids(&sorted), vec![3, 2, 5, 1, 4]);
    }
}
