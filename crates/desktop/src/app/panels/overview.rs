//! Analytics overview: headline figures and goal progress

use analytix_core::ui::format_count;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use crate::app::AnalytixApp;

const UP_COLOR: Color32 = Color32::from_rgb(34, 197, 94);
const DOWN_COLOR: Color32 = Color32::from_rgb(239, 68, 68);

fn metric_card(ui: &mut Ui, title: &str, value: String, growth: f64) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(200.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).weak());
            ui.label(RichText::new(value).size(22.0).strong());
            let (icon, color) = if growth >= 0.0 {
                (regular::TREND_UP, UP_COLOR)
            } else {
                (regular::TREND_DOWN, DOWN_COLOR)
            };
            ui.label(RichText::new(format!("{} {:+.1}%", icon, growth)).color(color));
        });
    });
}

/// "$" prefixes the value, any other unit follows it
fn goal_value(value: f64, unit: &str) -> String {
    let number = if value.fract() == 0.0 { format_count(value as i64) } else { value.to_string() };
    if unit == "$" {
        format!("${}", number)
    } else {
        format!("{}{}", number, unit)
    }
}

fn goal_color(name: &str) -> Color32 {
    match name {
        "blue" => Color32::from_rgb(59, 130, 246),
        "green" => UP_COLOR,
        "purple" => Color32::from_rgb(168, 85, 247),
        _ => Color32::GRAY,
    }
}

impl AnalytixApp {
    pub(crate) fn render_overview_page(&mut self, ctx: &egui::Context) {
        let mut export_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Analytics Overview");
                ui.label(RichText::new(self.period.label()).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let busy = self.report_export.is_some();
                    let label = if busy {
                        format!("{} Exporting...", regular::SPINNER)
                    } else {
                        format!("{} Export Overview", regular::DOWNLOAD_SIMPLE)
                    };
                    if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                        export_clicked = true;
                    }
                });
            });
            ui.add_space(8.0);

            let summary = &self.summary;
            ui.horizontal_wrapped(|ui| {
                metric_card(ui, "Total Revenue", format!("${}", format_count(summary.total_revenue.round() as i64)), summary.revenue_growth);
                metric_card(ui, "Total Users", format_count(summary.total_users as i64), summary.user_growth);
                metric_card(ui, "Conversion Rate", format!("{}%", summary.conversion_rate), summary.conversion_growth);
                metric_card(ui, "Avg. Order Value", format!("${:.2}", summary.avg_order_value), summary.aov_growth);
            });

            ui.add_space(16.0);
            ui.heading("Goals");
            ui.add_space(4.0);
            for goal in &self.goals {
                ui.horizontal(|ui| {
                    ui.add_sized([160.0, 18.0], egui::Label::new(&goal.title));
                    let fraction = (goal.progress_percent() / 100.0).clamp(0.0, 1.0) as f32;
                    ui.add(
                        egui::ProgressBar::new(fraction)
                            .desired_width(300.0)
                            .fill(goal_color(&goal.color))
                            .text(format!("{:.1}%", goal.progress_percent())),
                    );
                    let progress = format!("{} / {}", goal_value(goal.current, &goal.unit), goal_value(goal.target, &goal.unit));
                    ui.label(RichText::new(progress).weak());
                    if goal.is_achieved() {
                        ui.label(RichText::new(format!("{} Achieved", regular::CHECK)).color(UP_COLOR));
                    }
                });
            }
        });

        if export_clicked {
            self.start_overview_export();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_value_units() {
        assert_eq!(goal_value(245890.0, "$"), "$245,890");
        assert_eq!(goal_value(4.2, "%"), "4.2%");
        assert_eq!(goal_value(15000.0, ""), "15,000");
    }
}
