//! Reports page: performance summary, campaign table and the full report export

use analytix_core::ui::{render_data_table, REPORT_COLUMNS};
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular;

use crate::app::{AnalytixApp, ReportMetric, TableId};

impl AnalytixApp {
    pub(crate) fn render_reports_page(&mut self, ctx: &egui::Context) {
        let mut export_report_clicked = false;

        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Reports");
                    egui::ComboBox::from_id_salt("report_metric")
                        .selected_text(self.report_metric.label())
                        .show_ui(ui, |ui| {
                            for metric in ReportMetric::ALL {
                                ui.selectable_value(&mut self.report_metric, metric, metric.label());
                            }
                        });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let busy = self.report_export.is_some();
                        let label = if busy {
                            format!("{} Exporting...", regular::SPINNER)
                        } else {
                            format!("{} Export Report", regular::FILE_CSV)
                        };
                        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                            export_report_clicked = true;
                        }
                    });
                });
                ui.add_space(8.0);

                egui::Grid::new("performance_overview").num_columns(3).striped(true).spacing([24.0, 6.0]).show(ui, |ui| {
                    for item in &self.performance {
                        ui.label(&item.metric);
                        ui.label(RichText::new(&item.value).strong());
                        let color = if item.trend == "up" {
                            Color32::from_rgb(34, 197, 94)
                        } else {
                            Color32::from_rgb(239, 68, 68)
                        };
                        ui.label(RichText::new(&item.change).color(color));
                        ui.end_row();
                    }
                });

                ui.add_space(16.0);
                render_data_table(ui, &self.report_table, REPORT_COLUMNS)
            })
            .inner;

        if response.apply_to(&mut self.report_table) {
            self.start_table_export(TableId::Reports);
        }
        if export_report_clicked {
            self.start_advanced_report_export();
        }
    }
}
