//! Type definitions for the table engine

use serde::{Deserialize, Serialize};

use crate::constants::CATEGORY_ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Field and direction the view is ordered by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self::ascending("id")
    }
}

impl SortCriteria {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Same field flips the direction, a new field starts ascending
    pub fn toggle(&self, field: &str) -> Self {
        if self.field == field {
            Self {
                field: self.field.clone(),
                direction: self.direction.toggle(),
            }
        } else {
            Self::ascending(field)
        }
    }
}

/// Equality constraint on a categorical field; `All` imposes nothing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value, treating the "all" sentinel as no constraint
    pub fn from_selection(value: &str) -> Self {
        if value == CATEGORY_ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn label(&self, all_text: &str) -> String {
        match self {
            CategoryFilter::All => all_text.to_string(),
            CategoryFilter::Only(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

/// Per-table export lifecycle: `Idle -> Exporting -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
}

impl ExportState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ExportState::Exporting)
    }
}
