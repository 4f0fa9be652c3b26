//! Header, filter bar and bulk-action toolbar

use egui::{self, RichText, Ui};
use egui_phosphor::regular;

use super::columns::{field_label, format_count};
use super::DataTableResponse;
use crate::table::{CategoryFilter, TableCommand, TableController, TableView, ViewMode};
use crate::models::TableRow;
use crate::ui::instant_tooltip;

/// Title, counts, view toggle and export button
pub fn render_header<R: TableRow>(
    ui: &mut Ui,
    table: &TableController<R>,
    view: &TableView<'_, R>,
    response: &mut DataTableResponse,
) {
    let options = table.options();
    let state = table.state();

    ui.horizontal(|ui| {
        ui.heading(table.title());
        let mut counts = format!("{} results", format_count(view.len() as i64));
        if options.show_bulk_actions && !state.selection.is_empty() {
            counts.push_str(&format!(" • {} selected", state.selection.len()));
        }
        ui.label(RichText::new(counts).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if options.show_export {
                let exporting = table.is_exporting();
                let label = if exporting {
                    format!("{} Exporting...", regular::SPINNER)
                } else {
                    format!("{} Export", regular::DOWNLOAD_SIMPLE)
                };
                let btn = ui.add_enabled(!exporting, egui::Button::new(label));
                if btn.clicked() {
                    response.export_requested = true;
                }
                let tooltip = if state.selection.is_empty() {
                    "Export the current view to CSV"
                } else {
                    "Export the selected rows to CSV"
                };
                instant_tooltip(&btn, tooltip);
            }

            if options.show_view_toggle {
                let grid = ui.selectable_label(state.view_mode == ViewMode::Grid, regular::SQUARES_FOUR.to_string());
                if grid.clicked() && state.view_mode != ViewMode::Grid {
                    response.commands.push(TableCommand::SetViewMode(ViewMode::Grid));
                }
                instant_tooltip(&grid, "Grid view");

                let list = ui.selectable_label(state.view_mode == ViewMode::Table, regular::LIST.to_string());
                if list.clicked() && state.view_mode != ViewMode::Table {
                    response.commands.push(TableCommand::SetViewMode(ViewMode::Table));
                }
                instant_tooltip(&list, "Table view");
            }
        });
    });
}

/// Search box, one selector per category field and the clear button
pub fn render_filter_bar<R: TableRow>(ui: &mut Ui, table: &TableController<R>, commands: &mut Vec<TableCommand>) {
    let filter = &table.state().filter;

    ui.horizontal(|ui| {
        let mut query = filter.query.clone();
        let search = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(format!("{} Search...", regular::MAGNIFYING_GLASS))
                .desired_width(220.0),
        );
        if search.changed() {
            commands.push(TableCommand::Query(query));
        }

        for field in &table.options().category_fields {
            ui.add_space(6.0);
            let current = filter.category(field).clone();
            let all_text = format!("All {}", field_label(field));
            let mut selected = current.clone();

            egui::ComboBox::from_id_salt(("category_filter", table.title(), field.as_str()))
                .selected_text(current.label(&all_text))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, CategoryFilter::All, all_text.as_str());
                    for value in table.category_options(field) {
                        let option = CategoryFilter::Only(value.clone());
                        ui.selectable_value(&mut selected, option, value);
                    }
                });

            if selected != current {
                commands.push(TableCommand::Category { field: field.clone(), filter: selected });
            }
        }

        ui.add_space(6.0);
        if !filter.is_active() {
            ui.add_enabled(false, egui::Button::new("Clear"));
        } else if ui.button("Clear").clicked() {
            commands.push(TableCommand::ClearFilters);
        }
    });
}

/// Shown while at least one row is selected
pub fn render_bulk_toolbar<R: TableRow>(ui: &mut Ui, table: &TableController<R>, response: &mut DataTableResponse) {
    let selected = table.state().selection.len();
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} selected", selected)).strong());
            ui.add_space(10.0);
            if table.options().show_export {
                let btn = ui.add_enabled(
                    !table.is_exporting(),
                    egui::Button::new(format!("{} Export Selected", regular::DOWNLOAD_SIMPLE)),
                );
                if btn.clicked() {
                    response.export_requested = true;
                }
            }
            if ui.button(format!("{} Clear Selection", regular::X)).clicked() {
                response.commands.push(TableCommand::ClearSelection);
            }
        });
    });
}
