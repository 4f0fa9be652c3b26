//! Campaign performance page

use analytix_core::ui::{render_data_table, CAMPAIGN_COLUMNS};
use eframe::egui;

use crate::app::{AnalytixApp, TableId};

impl AnalytixApp {
    pub(crate) fn render_campaigns_page(&mut self, ctx: &egui::Context) {
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| render_data_table(ui, &self.campaign_table, CAMPAIGN_COLUMNS))
            .inner;

        if response.apply_to(&mut self.campaign_table) {
            self.start_table_export(TableId::Campaigns);
        }
    }
}
