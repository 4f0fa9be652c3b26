//! Table options and the immutable view state
//!
//! Every transition consumes the state and returns the next one, so the
//! controller can be tested without a rendering environment.

use serde::{Deserialize, Serialize};

use super::filters::FilterCriteria;
use super::pagination::clamp_page;
use super::selection::Selection;
use super::types::{CategoryFilter, ExportState, SortCriteria, ViewMode};
use crate::constants::{ADVANCED_PAGE_SIZE, BASIC_PAGE_SIZE, CAMPAIGN_EXPORT_BASE, REPORT_EXPORT_BASE};
use crate::error::TableError;
use crate::models::RowId;

/// Feature toggles and layout of one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Render the search box and category selectors
    #[serde(default = "default_true")]
    pub show_filters: bool,

    /// Render the export control
    #[serde(default = "default_true")]
    pub show_export: bool,

    /// Render checkboxes and the multi-select toolbar
    #[serde(default = "default_true")]
    pub show_bulk_actions: bool,

    /// Offer the table/grid toggle
    #[serde(default = "default_true")]
    pub show_view_toggle: bool,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Fields offered as category selectors, e.g. status and channel
    #[serde(default)]
    pub category_fields: Vec<String>,

    /// Export file name prefix; the date and extension are appended
    #[serde(default = "default_export_base_name")]
    pub export_base_name: String,

    /// Explicit export columns; `None` uses the first row's field names
    #[serde(default)]
    pub export_headers: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    ADVANCED_PAGE_SIZE
}

fn default_export_base_name() -> String {
    CAMPAIGN_EXPORT_BASE.to_string()
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            show_filters: true,
            show_export: true,
            show_bulk_actions: true,
            show_view_toggle: true,
            page_size: default_page_size(),
            category_fields: Vec::new(),
            export_base_name: default_export_base_name(),
            export_headers: None,
        }
    }
}

impl TableOptions {
    /// Search, status/channel filters, selection and export, ten rows a page
    pub fn advanced() -> Self {
        Self {
            category_fields: vec!["status".to_string(), "channel".to_string()],
            ..Self::default()
        }
    }

    /// Search and sort only, five rows a page, exported as the campaign summary
    pub fn basic() -> Self {
        Self {
            show_bulk_actions: false,
            show_view_toggle: false,
            page_size: BASIC_PAGE_SIZE,
            export_base_name: REPORT_EXPORT_BASE.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        Ok(())
    }
}

/// A partially specified [`TableOptions`], applied over a preset
///
/// Config sections only name the fields they change; everything else keeps
/// the preset's value rather than the per-field defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableOptionsOverrides {
    pub show_filters: Option<bool>,
    pub show_export: Option<bool>,
    pub show_bulk_actions: Option<bool>,
    pub show_view_toggle: Option<bool>,
    pub page_size: Option<usize>,
    pub category_fields: Option<Vec<String>>,
    pub export_base_name: Option<String>,
    pub export_headers: Option<Vec<String>>,
}

impl TableOptionsOverrides {
    pub fn apply_to(self, mut base: TableOptions) -> TableOptions {
        if let Some(v) = self.show_filters {
            base.show_filters = v;
        }
        if let Some(v) = self.show_export {
            base.show_export = v;
        }
        if let Some(v) = self.show_bulk_actions {
            base.show_bulk_actions = v;
        }
        if let Some(v) = self.show_view_toggle {
            base.show_view_toggle = v;
        }
        if let Some(v) = self.page_size {
            base.page_size = v;
        }
        if let Some(v) = self.category_fields {
            base.category_fields = v;
        }
        if let Some(v) = self.export_base_name {
            base.export_base_name = v;
        }
        if self.export_headers.is_some() {
            base.export_headers = self.export_headers;
        }
        base
    }
}

/// Everything a table derives its view from, apart from the raw rows
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewState {
    pub filter: FilterCriteria,
    pub sort: SortCriteria,
    /// 1-based
    pub page: usize,
    pub selection: Selection,
    pub view_mode: ViewMode,
    pub export_state: ExportState,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            page: 1,
            selection: Selection::default(),
            view_mode: ViewMode::default(),
            export_state: ExportState::default(),
        }
    }
}

impl TableViewState {
    pub fn apply_query(mut self, query: impl Into<String>) -> Self {
        self.filter.query = query.into();
        self
    }

    pub fn apply_category(mut self, field: &str, filter: CategoryFilter) -> Self {
        self.filter.set_category(field, filter);
        self
    }

    pub fn clear_filters(mut self) -> Self {
        self.filter = FilterCriteria::default();
        self
    }

    /// Header click on `field`
    pub fn apply_sort(mut self, field: &str) -> Self {
        self.sort = self.sort.toggle(field);
        self
    }

    pub fn goto_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Keep the page index inside the current result, e.g. after a filter narrowed it
    pub fn clamp_page(mut self, filtered_count: usize, page_size: usize) -> Self {
        self.page = clamp_page(self.page, filtered_count, page_size);
        self
    }

    pub fn toggle_selection(mut self, id: RowId) -> Self {
        self.selection.toggle(id);
        self
    }

    pub fn select_all_visible(mut self, visible: &[RowId]) -> Self {
        self.selection.select_all_visible(visible);
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.selection.clear();
        self
    }

    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn with_export_state(mut self, export_state: ExportState) -> Self {
        self.export_state = export_state;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortDirection;

    #[test]
    fn test_default_state() {
        let state = TableViewState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.sort, SortCriteria::ascending("id"));
        assert_eq!(state.export_state, ExportState::Idle);
    }

    #[test]
    fn test_transitions_return_new_state() {
        let before = TableViewState::default();
        let after = before.clone().apply_query("promo").apply_sort("id").goto_page(3);
        assert_eq!(before.filter.query, "");
        assert_eq!(after.filter.query, "promo");
        assert_eq!(after.sort.direction, SortDirection::Descending);
        assert_eq!(after.page, 3);
        assert_eq!(after.clamp_page(4, 5).page, 1);
    }

    #[test]
    fn test_options_serde_defaults() {
        let options: TableOptions = serde_json::from_str(r#"{"show_export": false}"#).unwrap();
        assert!(options.show_filters);
        assert!(!options.show_export);
        assert!(options.show_bulk_actions);
        assert_eq!(options.page_size, ADVANCED_PAGE_SIZE);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let options = TableOptions { page_size: 0, ..TableOptions::basic() };
        assert!(matches!(options.validate(), Err(TableError::InvalidPageSize)));
    }

    #[test]
    fn test_overrides_keep_preset_fields() {
        let overrides: TableOptionsOverrides = serde_json::from_str(r#"{"page_size": 25}"#).unwrap();
        let advanced = overrides.apply_to(TableOptions::advanced());
        assert_eq!(advanced.page_size, 25);
        assert_eq!(advanced.category_fields, vec!["status", "channel"]);

        let overrides: TableOptionsOverrides = serde_json::from_str(r#"{"page_size": 8}"#).unwrap();
        let basic = overrides.apply_to(TableOptions::basic());
        assert_eq!(basic.page_size, 8);
        assert!(!basic.show_bulk_actions);
        assert!(!basic.show_view_toggle);
    }

    #[test]
    fn test_presets_export_under_different_names() {
        assert_ne!(TableOptions::advanced().export_base_name, TableOptions::basic().export_base_name);
        assert_eq!(TableOptions::basic().export_base_name, "campaign-summary");
    }
}
