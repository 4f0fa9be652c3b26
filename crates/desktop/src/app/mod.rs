//! Main application module

mod panels;
mod state;

use crate::config::{Config, Period};
use analytix_core::{
    mock_data, AnalyticsSummary, CampaignRow, ChartData, Goal, PerformanceMetric, TableController, TableError,
};

use eframe::egui;
use tracing::info;

pub(crate) use state::ExportReceiver;

/// Top-level page shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Overview,
    #[default]
    Campaigns,
    Reports,
}

/// Metric the advanced report is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMetric {
    #[default]
    Revenue,
    Conversions,
    Traffic,
    Engagement,
}

impl ReportMetric {
    pub const ALL: [ReportMetric; 4] =
        [ReportMetric::Revenue, ReportMetric::Conversions, ReportMetric::Traffic, ReportMetric::Engagement];

    pub fn code(&self) -> &'static str {
        match self {
            ReportMetric::Revenue => "revenue",
            ReportMetric::Conversions => "conversions",
            ReportMetric::Traffic => "traffic",
            ReportMetric::Engagement => "engagement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportMetric::Revenue => "Revenue",
            ReportMetric::Conversions => "Conversions",
            ReportMetric::Traffic => "Traffic",
            ReportMetric::Engagement => "Engagement",
        }
    }
}

/// The two campaign tables, each with its own export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    Campaigns,
    Reports,
}

impl TableId {
    pub const ALL: [TableId; 2] = [TableId::Campaigns, TableId::Reports];
}

pub struct AnalytixApp {
    pub(crate) config: Config,
    pub(crate) page: Page,
    pub(crate) period: Period,
    pub(crate) report_metric: ReportMetric,
    pub(crate) campaign_table: TableController<CampaignRow>,
    pub(crate) report_table: TableController<CampaignRow>,
    pub(crate) summary: AnalyticsSummary,
    pub(crate) goals: Vec<Goal>,
    pub(crate) performance: Vec<PerformanceMetric>,
    pub(crate) charts: ChartData,
    pub(crate) status: String,
    // Shown in a modal until dismissed
    pub(crate) alert: Option<String>,
    // Table exports running on worker threads
    pub(crate) campaign_export: Option<ExportReceiver>,
    pub(crate) report_table_export: Option<ExportReceiver>,
    // Multi-section report export: (title, receiver)
    pub(crate) report_export: Option<(String, ExportReceiver)>,
}

impl AnalytixApp {
    pub fn new(config: Config) -> Result<Self, TableError> {
        let campaigns = mock_data::campaigns()?;
        info!(campaigns = campaigns.len(), "Loaded mock data");

        // Both tables share the same immutable rows
        let rows: std::sync::Arc<[CampaignRow]> = campaigns.into();
        let campaign_table =
            TableController::new("Campaign Performance", rows.clone(), config.campaign_table.clone())?;
        let report_table = TableController::new("Top Campaigns", rows, config.report_table.clone())?;

        Ok(Self {
            page: Page::default(),
            period: config.default_period,
            report_metric: ReportMetric::default(),
            campaign_table,
            report_table,
            summary: mock_data::analytics_summary()?,
            goals: mock_data::goals()?,
            performance: mock_data::performance_metrics()?,
            charts: mock_data::chart_data()?,
            status: "Ready".to_string(),
            alert: None,
            campaign_export: None,
            report_table_export: None,
            report_export: None,
            config,
        })
    }

    pub(crate) fn table_mut(&mut self, id: TableId) -> &mut TableController<CampaignRow> {
        match id {
            TableId::Campaigns => &mut self.campaign_table,
            TableId::Reports => &mut self.report_table,
        }
    }

    pub(crate) fn export_slot(&mut self, id: TableId) -> &mut Option<ExportReceiver> {
        match id {
            TableId::Campaigns => &mut self.campaign_export,
            TableId::Reports => &mut self.report_table_export,
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.campaign_export.is_some() || self.report_table_export.is_some() || self.report_export.is_some()
    }
}

impl eframe::App for AnalytixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_exports();

        // Keep polling while an export is running
        if self.is_busy() {
            ctx.request_repaint();
        }

        // Track window state for persistence (only when not maximized to preserve restore size)
        ctx.input(|i| {
            let maximized = i.viewport().maximized.unwrap_or(false);
            self.config.window_maximized = maximized;
            if !maximized {
                if let Some(rect) = i.viewport().inner_rect {
                    self.config.window_x = Some(rect.min.x);
                    // inner_rect reports ~30px higher than the outer window position
                    self.config.window_y = Some((rect.min.y - 30.0).max(0.0));
                    self.config.window_width = Some(rect.width());
                    self.config.window_height = Some(rect.height());
                }
            }
        });

        self.render_top_panel(ctx);
        self.render_status_bar(ctx);
        match self.page {
            Page::Overview => self.render_overview_page(ctx),
            Page::Campaigns => self.render_campaigns_page(ctx),
            Page::Reports => self.render_reports_page(ctx),
        }
        self.render_alert_modal(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}
