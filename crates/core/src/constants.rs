//! Table defaults and sentinels

/// Rows per page for the basic campaign table
pub const BASIC_PAGE_SIZE: usize = 5;

/// Rows per page for the advanced campaign table
pub const ADVANCED_PAGE_SIZE: usize = 10;

/// Maximum number of numbered page buttons shown in the pager
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Joins field renderings in a row's searchable text so a query can't match across two fields
pub const SEARCH_FIELD_SEPARATOR: char = '\u{1f}';

/// Value the category selectors use for "no constraint"
pub const CATEGORY_ALL: &str = "all";

/// MIME type of CSV downloads
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Default export base name for campaign tables
pub const CAMPAIGN_EXPORT_BASE: &str = "campaign-performance";

/// Export base name for the campaign summary on the reports page
pub const REPORT_EXPORT_BASE: &str = "campaign-summary";
