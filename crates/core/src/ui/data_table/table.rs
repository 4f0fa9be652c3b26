//! Row rendering: striped table or card grid

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::columns::{format_cell, sort_indicator, status_color, ColumnSpec};
use crate::models::{RowId, TableRow};
use crate::table::{TableCommand, TableController, TableView};

const CARD_WIDTH: f32 = 230.0;

fn cell_text(field: &str, text: String) -> RichText {
    match status_color(&text) {
        Some(color) if field == "status" => RichText::new(text).color(color).strong(),
        _ => RichText::new(text),
    }
}

/// Render the current page as a table
pub fn render_table_rows<R: TableRow>(
    ui: &mut Ui,
    table: &TableController<R>,
    view: &TableView<'_, R>,
    columns: &[ColumnSpec],
    commands: &mut Vec<TableCommand>,
) {
    let state = table.state();
    let selectable = table.options().show_bulk_actions;
    let page_rows = view.page_rows();
    let visible: Vec<RowId> = view.ids();

    let body_font_size = egui::TextStyle::Body.resolve(ui.style()).size;
    let font_scale = body_font_size / 14.0;
    let row_height = body_font_size.max(ui.spacing().interact_size.y) + 8.0;
    let header_height = (24.0 * font_scale).max(24.0);

    let mut builder = TableBuilder::new(ui)
        .id_salt(("data_table", table.title()))
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));

    if selectable {
        builder = builder.column(Column::exact(28.0));
    }
    for (i, column) in columns.iter().enumerate() {
        let width = column.width * font_scale;
        builder = if i == 0 {
            builder.column(Column::initial(width).at_least(120.0).clip(true).resizable(true))
        } else {
            builder.column(Column::exact(width))
        };
    }

    builder
        .min_scrolled_height(0.0)
        .header(header_height, |mut header| {
            if selectable {
                header.col(|ui| {
                    let mut all = state.selection.all_selected(&visible);
                    if ui.checkbox(&mut all, "").changed() {
                        commands.push(TableCommand::SelectAllVisible);
                    }
                });
            }
            for column in columns {
                header.col(|ui| {
                    if !column.sortable {
                        ui.label(RichText::new(column.label).strong());
                        return;
                    }
                    let indicator = sort_indicator(&state.sort, column.field);
                    let label = if indicator.is_empty() {
                        column.label.to_string()
                    } else {
                        format!("{} {}", column.label, indicator)
                    };
                    if ui.selectable_label(state.sort.field == column.field, label).clicked() {
                        commands.push(TableCommand::Sort(column.field.to_string()));
                    }
                });
            }
        })
        .body(|body| {
            body.rows(row_height, page_rows.len(), |mut row| {
                let record = page_rows[row.index()];
                let id = record.row_id();
                if selectable {
                    row.col(|ui| {
                        let mut checked = state.selection.contains(id);
                        if ui.checkbox(&mut checked, "").changed() {
                            commands.push(TableCommand::ToggleRow(id));
                        }
                    });
                }
                for column in columns {
                    row.col(|ui| {
                        let text = format_cell(&record.field(column.field));
                        ui.label(cell_text(column.field, text));
                    });
                }
            });
        });
}

/// Render the current page as wrapped cards, first column as the title
pub fn render_grid<R: TableRow>(
    ui: &mut Ui,
    table: &TableController<R>,
    view: &TableView<'_, R>,
    columns: &[ColumnSpec],
    commands: &mut Vec<TableCommand>,
) {
    let Some((title_column, detail_columns)) = columns.split_first() else {
        return;
    };
    let state = table.state();
    let selectable = table.options().show_bulk_actions;
    let highlight = ui.visuals().selection.bg_fill;

    egui::ScrollArea::vertical().id_salt(("data_grid", table.title())).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for record in view.page_rows() {
                let id = record.row_id();
                let selected = state.selection.contains(id);
                let mut frame = egui::Frame::group(ui.style());
                if selected {
                    frame = frame.stroke(egui::Stroke::new(1.5, highlight));
                }
                frame.show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            if selectable {
                                let mut checked = selected;
                                if ui.checkbox(&mut checked, "").changed() {
                                    commands.push(TableCommand::ToggleRow(id));
                                }
                            }
                            let title = format_cell(&record.field(title_column.field));
                            ui.add(egui::Label::new(RichText::new(title).strong()).truncate());
                        });
                        ui.separator();
                        egui::Grid::new(("card", id)).num_columns(2).spacing([12.0, 2.0]).show(ui, |ui| {
                            for column in detail_columns {
                                ui.label(RichText::new(column.label).color(Color32::GRAY));
                                let text = format_cell(&record.field(column.field));
                                ui.label(cell_text(column.field, text));
                                ui.end_row();
                            }
                        });
                    });
                });
            }
        });
    });
}
