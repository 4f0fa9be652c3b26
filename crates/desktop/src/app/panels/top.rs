//! Top navigation bar and bottom status bar

use eframe::egui;
use egui_phosphor::regular;

use crate::app::{AnalytixApp, Page};
use crate::config::Period;

impl AnalytixApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Analytix");
                ui.separator();

                ui.selectable_value(&mut self.page, Page::Overview, format!("{} Overview", regular::HOUSE));
                ui.selectable_value(&mut self.page, Page::Campaigns, format!("{} Campaigns", regular::MEGAPHONE));
                ui.selectable_value(&mut self.page, Page::Reports, format!("{} Reports", regular::CHART_LINE));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::ComboBox::from_id_salt("period")
                        .selected_text(self.period.label())
                        .show_ui(ui, |ui| {
                            for period in Period::ALL {
                                ui.selectable_value(&mut self.period, period, period.label());
                            }
                        });
                    ui.label(regular::CALENDAR_BLANK);
                });
            });
        });
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_busy() {
                    ui.spinner();
                }
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let dir = self.config.export_dir();
                    ui.label(egui::RichText::new(format!("{} {}", regular::FOLDER, dir.display())).weak());
                });
            });
        });
    }
}
