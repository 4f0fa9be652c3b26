//! Analytix core - table engine, CSV export and mock data shared by the dashboard
//!
//! The table engine is UI-agnostic: every recompute is a pure function over the
//! immutable input rows, and [`TableController`] owns the per-table view state.
//! Rendering with egui lives behind the `ui` feature.

pub mod constants;
pub mod error;
pub mod export;
pub mod mock_data;
pub mod models;
pub mod table;

#[cfg(feature = "ui")]
pub mod ui;

pub use error::{ExportError, TableError};
pub use export::*;
pub use models::*;
pub use table::*;
