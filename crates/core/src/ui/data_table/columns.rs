//! Column layouts and cell formatting

use egui::Color32;

use crate::models::FieldValue;
use crate::table::{SortCriteria, SortDirection};

/// One rendered column: which field it shows and how
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub label: &'static str,
    /// Base width in points at a 14pt body font
    pub width: f32,
    pub sortable: bool,
}

impl ColumnSpec {
    pub const fn new(field: &'static str, label: &'static str, width: f32) -> Self {
        Self { field, label, width, sortable: true }
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Campaign performance table
pub const CAMPAIGN_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("campaign", "Campaign", 200.0),
    ColumnSpec::new("channel", "Channel", 80.0),
    ColumnSpec::new("status", "Status", 80.0),
    ColumnSpec::new("impressions", "Impressions", 95.0),
    ColumnSpec::new("clicks", "Clicks", 70.0),
    ColumnSpec::new("ctr", "CTR", 55.0),
    ColumnSpec::new("conversions", "Conv.", 65.0),
    ColumnSpec::new("conversionRate", "Conv. Rate", 80.0),
    ColumnSpec::new("revenue", "Revenue", 85.0),
    ColumnSpec::new("budget", "Budget", 75.0).unsortable(),
    ColumnSpec::new("spend", "Spend", 75.0).unsortable(),
    ColumnSpec::new("roas", "ROAS", 55.0),
];

/// Compact campaign table on the reports page
pub const REPORT_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("campaign", "Campaign", 200.0),
    ColumnSpec::new("impressions", "Impressions", 95.0),
    ColumnSpec::new("clicks", "Clicks", 70.0),
    ColumnSpec::new("conversions", "Conversions", 90.0),
    ColumnSpec::new("revenue", "Revenue", 85.0),
    ColumnSpec::new("ctr", "CTR", 55.0),
];

/// Caret icon for the sorted column, empty for the rest
pub fn sort_indicator(sort: &SortCriteria, field: &str) -> &'static str {
    if sort.field != field {
        return "";
    }
    match sort.direction {
        SortDirection::Ascending => egui_phosphor::regular::CARET_UP,
        SortDirection::Descending => egui_phosphor::regular::CARET_DOWN,
    }
}

/// Integer with thousands separators, e.g. 12847 -> "12,847"
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Display text of a cell; missing values render as a dash
pub fn format_cell(value: &FieldValue) -> String {
    match value {
        FieldValue::Integer(n) => format_count(*n),
        FieldValue::Missing => "—".to_string(),
        other => other.to_string(),
    }
}

/// "conversionRate" -> "Conversion Rate"
pub fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else if ch == '_' {
            label.push(' ');
        } else {
            label.push(ch);
        }
    }
    label
}

/// Badge colour for campaign status values
pub fn status_color(status: &str) -> Option<Color32> {
    match status {
        "Active" => Some(Color32::from_rgb(34, 197, 94)),
        "Paused" => Some(Color32::from_rgb(234, 179, 8)),
        "Completed" => Some(Color32::from_rgb(148, 163, 184)),
        _ => None,
    }
}
