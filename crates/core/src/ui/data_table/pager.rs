//! Pagination controls below the table

use egui::{self, RichText, Ui};
use egui_phosphor::regular;

use crate::models::TableRow;
use crate::table::{page_buttons, TableCommand, TableView};

pub fn render_pager<R: TableRow>(ui: &mut Ui, view: &TableView<'_, R>, commands: &mut Vec<TableCommand>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(view.page_range().label()).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right-to-left, so Next goes in first
            let next = egui::Button::new(format!("Next {}", regular::CARET_RIGHT));
            if ui.add_enabled(view.page < view.total_pages, next).clicked() {
                commands.push(TableCommand::NextPage);
            }

            for page in page_buttons(view.page, view.total_pages).into_iter().rev() {
                if ui.selectable_label(page == view.page, page.to_string()).clicked() && page != view.page {
                    commands.push(TableCommand::GotoPage(page));
                }
            }

            let prev = egui::Button::new(format!("{} Previous", regular::CARET_LEFT));
            if ui.add_enabled(view.page > 1, prev).clicked() {
                commands.push(TableCommand::PrevPage);
            }
        });
    });
}
