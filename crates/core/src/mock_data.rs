//! Bundled dashboard data
//!
//! The JSON files under `data/` are compiled into the binary and parsed on demand.

use serde::Deserialize;

use crate::error::TableError;
use crate::models::{AnalyticsSummary, CampaignRow, ChartData, Goal, PerformanceMetric};

const CAMPAIGNS_JSON: &str = include_str!("../data/campaigns.json");
const OVERVIEW_JSON: &str = include_str!("../data/overview.json");
const CHARTS_JSON: &str = include_str!("../data/charts.json");

#[derive(Debug, Deserialize)]
struct Overview {
    summary: AnalyticsSummary,
    goals: Vec<Goal>,
    performance: Vec<PerformanceMetric>,
}

fn overview() -> Result<Overview, TableError> {
    Ok(serde_json::from_str(OVERVIEW_JSON)?)
}

/// Rows for the campaign performance table
pub fn campaigns() -> Result<Vec<CampaignRow>, TableError> {
    Ok(serde_json::from_str(CAMPAIGNS_JSON)?)
}

pub fn analytics_summary() -> Result<AnalyticsSummary, TableError> {
    Ok(overview()?.summary)
}

pub fn goals() -> Result<Vec<Goal>, TableError> {
    Ok(overview()?.goals)
}

pub fn performance_metrics() -> Result<Vec<PerformanceMetric>, TableError> {
    Ok(overview()?.performance)
}

pub fn chart_data() -> Result<ChartData, TableError> {
    Ok(serde_json::from_str(CHARTS_JSON)?)
}
