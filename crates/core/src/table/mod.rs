//! Data table engine - shared by the basic and advanced campaign tables
//!
//! Pipeline: raw rows -> filter -> sort -> paginate -> render.
//! Selection and export operate on the filtered+sorted view, never on the raw input.

mod types;
mod filters;
mod sorting;
mod pagination;
mod selection;
mod state;
mod controller;

pub use types::{CategoryFilter, ExportState, SortCriteria, SortDirection, ViewMode};
pub use filters::{filter_rows, matches_criteria, unique_values, FilterCriteria};
pub use sorting::{compare_values, sort_rows};
pub use pagination::{clamp_page, page_buttons, page_range, paginate, total_pages, PageRange};
pub use selection::Selection;
pub use state::{TableOptions, TableOptionsOverrides, TableViewState};
pub use controller::{ExportOutcome, TableCommand, TableController, TableView};
