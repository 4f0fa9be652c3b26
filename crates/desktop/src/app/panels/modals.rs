//! Modal dialogs

use eframe::egui;
use egui_phosphor::regular;

use crate::app::AnalytixApp;

impl AnalytixApp {
    /// Blocking alert for failed exports
    pub(crate) fn render_alert_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        let mut dismissed = false;

        egui::Window::new(format!("{} Export", regular::WARNING))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(16.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.alert = None;
        }
    }
}
