//! Multi-section report exports for the overview and reports pages

use std::path::PathBuf;
use tracing::{error, info};

use super::delimited::{sections_to_csv, ReportSection};
use super::payload::{complete_filename, DownloadSink, ExportPayload};
use crate::error::ExportError;
use crate::models::{AnalyticsSummary, ChartData, DynamicRow, Goal, PerformanceMetric};

fn growth(value: f64) -> String {
    format!("{}%", value)
}

/// "Analytics Overview" headline figures plus "Goals Progress"
pub fn analytics_overview_sections(summary: &AnalyticsSummary, goals: &[Goal], period: &str) -> Vec<ReportSection> {
    let overview = vec![
        DynamicRow::new()
            .with("metric", "Total Revenue")
            .with("value", summary.total_revenue)
            .with("growth", growth(summary.revenue_growth))
            .with("period", period),
        DynamicRow::new()
            .with("metric", "Total Users")
            .with("value", summary.total_users)
            .with("growth", growth(summary.user_growth))
            .with("period", period),
        DynamicRow::new()
            .with("metric", "Conversion Rate")
            .with("value", format!("{}%", summary.conversion_rate))
            .with("growth", growth(summary.conversion_growth))
            .with("period", period),
        DynamicRow::new()
            .with("metric", "Average Order Value")
            .with("value", summary.avg_order_value)
            .with("growth", growth(summary.aov_growth))
            .with("period", period),
    ];

    let progress = goals
        .iter()
        .map(|goal| {
            DynamicRow::new()
                .with("title", goal.title.as_str())
                .with("current", goal.current)
                .with("target", goal.target)
                .with("unit", goal.unit.as_str())
                .with("progress", format!("{:.1}%", goal.progress_percent()))
                .with("status", if goal.is_achieved() { "Achieved" } else { "In Progress" })
        })
        .collect();

    vec![
        ReportSection::new("Analytics Overview", overview),
        ReportSection::new("Goals Progress", progress),
    ]
}

/// Reports page: performance summary followed by the chart series
pub fn advanced_report_sections(performance: &[PerformanceMetric], charts: &ChartData) -> Vec<ReportSection> {
    let performance_rows = performance
        .iter()
        .map(|item| {
            DynamicRow::new()
                .with("metric", item.metric.as_str())
                .with("value", item.value.as_str())
                .with("change", item.change.as_str())
                .with("trend", item.trend.as_str())
        })
        .collect();

    vec![
        ReportSection::new("Performance Overview", performance_rows),
        ReportSection::new("Revenue Over Time", charts.revenue_over_time.clone()),
        ReportSection::new("Revenue by Channel", charts.revenue_by_channel.clone()),
        ReportSection::new("Traffic Sources", charts.traffic_sources.clone()),
    ]
}

/// Serialize sections into `<base>-complete.csv` and deliver it
pub fn export_report<S: DownloadSink + ?Sized>(
    sections: &[ReportSection],
    base_name: &str,
    sink: &mut S,
) -> Result<PathBuf, ExportError> {
    let result = sections_to_csv(sections)
        .map(|content| ExportPayload::csv(complete_filename(base_name), content))
        .and_then(|payload| sink.deliver(&payload));
    match &result {
        Ok(location) => info!(sections = sections.len(), "Exported report {}", location.display()),
        Err(e) => error!("Error exporting report {}: {}", base_name, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;

    fn summary() -> AnalyticsSummary {
        AnalyticsSummary {
            total_revenue: 245890.0,
            total_users: 12847,
            conversion_rate: 4.2,
            avg_order_value: 89.5,
            revenue_growth: 12.5,
            user_growth: 8.3,
            conversion_growth: -2.1,
            aov_growth: 5.7,
        }
    }

    fn goals() -> Vec<Goal> {
        vec![
            Goal {
                id: "1".into(),
                title: "Monthly Revenue".into(),
                current: 245890.0,
                target: 300000.0,
                unit: "$".into(),
                color: "blue".into(),
            },
            Goal {
                id: "2".into(),
                title: "Signups".into(),
                current: 120.0,
                target: 100.0,
                unit: String::new(),
                color: "green".into(),
            },
        ]
    }

    #[test]
    fn test_overview_sections() {
        let sections = analytics_overview_sections(&summary(), &goals(), "30d");
        let csv = sections_to_csv(&sections).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "=== ANALYTICS OVERVIEW ===");
        assert_eq!(lines[1], "metric,value,growth,period");
        assert_eq!(lines[2], "Total Revenue,245890,12.5%,30d");
        assert_eq!(lines[4], "Conversion Rate,4.2%,-2.1%,30d");
        assert_eq!(lines[5], "Average Order Value,89.5,5.7%,30d");
        assert!(csv.contains("=== GOALS PROGRESS ===\ntitle,current,target,unit,progress,status\n"));
        assert!(csv.contains("Monthly Revenue,245890,300000,$,82.0%,In Progress\n"));
        assert!(csv.contains("Signups,120,100,,120.0%,Achieved\n"));
    }

    #[test]
    fn test_advanced_report_empty_charts() {
        let performance = vec![PerformanceMetric {
            metric: "Total Revenue".into(),
            value: "$52,890".into(),
            change: "+12.5%".into(),
            trend: "up".into(),
        }];
        let sections = advanced_report_sections(&performance, &ChartData::default());
        let csv = sections_to_csv(&sections).unwrap();
        assert!(csv.starts_with("=== PERFORMANCE OVERVIEW ===\nmetric,value,change,trend\nTotal Revenue,\"$52,890\",+12.5%,up\n"));
        assert!(csv.contains("=== REVENUE BY CHANNEL ===\nNo data available\n"));
    }

    #[test]
    fn test_export_report_filename() {
        let mut sink = MemorySink::default();
        let sections = analytics_overview_sections(&summary(), &goals(), "7d");
        let location = export_report(&sections, "analytics-overview-7d", &mut sink).unwrap();
        assert_eq!(location, PathBuf::from("analytics-overview-7d-complete.csv"));
        assert_eq!(sink.payloads.len(), 1);
    }
}
