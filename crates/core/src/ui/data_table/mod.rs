//! Data table panel - shared by every page that lists rows
//!
//! Renders: header with counts and export, filter bar, bulk toolbar, rows as a
//! table or card grid, and the pager.

mod columns;
mod pager;
mod table;
mod toolbar;

pub use columns::{
    field_label, format_cell, format_count, sort_indicator, status_color, ColumnSpec, CAMPAIGN_COLUMNS,
    REPORT_COLUMNS,
};
pub use pager::render_pager;
pub use table::{render_grid, render_table_rows};
pub use toolbar::{render_bulk_toolbar, render_filter_bar, render_header};

use egui::{RichText, Ui};

use crate::models::TableRow;
use crate::table::{TableCommand, TableController, ViewMode};

/// What the user asked for during one frame
#[derive(Debug, Default)]
pub struct DataTableResponse {
    pub commands: Vec<TableCommand>,
    pub export_requested: bool,
}

impl DataTableResponse {
    /// Apply the collected commands; returns whether an export was requested
    pub fn apply_to<R: TableRow>(self, table: &mut TableController<R>) -> bool {
        for command in self.commands {
            table.apply(command);
        }
        self.export_requested
    }
}

/// Render a whole table according to its options
pub fn render_data_table<R: TableRow>(ui: &mut Ui, table: &TableController<R>, columns: &[ColumnSpec]) -> DataTableResponse {
    let mut response = DataTableResponse::default();
    let options = table.options();
    let view = table.view();

    render_header(ui, table, &view, &mut response);
    if options.show_filters {
        render_filter_bar(ui, table, &mut response.commands);
    }
    if options.show_bulk_actions && !table.state().selection.is_empty() {
        render_bulk_toolbar(ui, table, &mut response);
    }
    ui.add_space(4.0);

    if view.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("No results found").weak());
            ui.add_space(20.0);
        });
    } else {
        match table.state().view_mode {
            ViewMode::Table => render_table_rows(ui, table, &view, columns, &mut response.commands),
            ViewMode::Grid => render_grid(ui, table, &view, columns, &mut response.commands),
        }
    }

    ui.add_space(4.0);
    render_pager(ui, &view, &mut response.commands);
    response
}
