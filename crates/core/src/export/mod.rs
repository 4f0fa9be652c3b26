//! Export adapter - CSV payloads for tables and multi-section reports
//!
//! Failures are logged here and always returned to the caller.

mod delimited;
mod payload;
mod reports;

pub use delimited::{sections_to_csv, to_csv, ReportSection};
pub use payload::{complete_filename, export_filename, DirectorySink, DownloadSink, ExportPayload, MemorySink};
pub use reports::{advanced_report_sections, analytics_overview_sections, export_report};

use std::path::PathBuf;
use tracing::{error, info};

use crate::error::ExportError;
use crate::models::{Record, TableRow};
use crate::table::Selection;

/// Pick the rows to export from a filtered+sorted view
///
/// A non-empty selection narrows the view to the selected ids, keeping view order.
pub fn select_export_rows<'a, R: TableRow>(view: &[&'a R], selection: &Selection) -> Result<Vec<&'a R>, ExportError> {
    if selection.is_empty() {
        if view.is_empty() {
            return Err(ExportError::NoData);
        }
        return Ok(view.to_vec());
    }
    let rows: Vec<&'a R> = view
        .iter()
        .copied()
        .filter(|row| selection.contains(row.row_id()))
        .collect();
    if rows.is_empty() {
        return Err(ExportError::NoSelection);
    }
    Ok(rows)
}

/// Rows snapshotted for one export, detached from the table so it can run on another thread
#[derive(Debug, Clone)]
pub struct ExportJob<R> {
    rows: Vec<R>,
    headers: Option<Vec<String>>,
    filename: String,
}

impl<R: Record> ExportJob<R> {
    pub fn new(rows: Vec<R>, headers: Option<Vec<String>>, filename: String) -> Self {
        Self { rows, headers, filename }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Serialize the snapshot
    pub fn build(&self) -> Result<ExportPayload, ExportError> {
        let headers: Option<Vec<&str>> = self
            .headers
            .as_ref()
            .map(|headers| headers.iter().map(String::as_str).collect());
        let content = to_csv(&self.rows, headers.as_deref())?;
        Ok(ExportPayload::csv(self.filename.clone(), content))
    }

    /// Serialize and hand the payload to `sink`
    pub fn run_into<S: DownloadSink + ?Sized>(self, sink: &mut S) -> Result<PathBuf, ExportError> {
        let result = self.build().and_then(|payload| sink.deliver(&payload));
        match &result {
            Ok(location) => info!(rows = self.rows.len(), "Exported {}", location.display()),
            Err(e) => error!("Error exporting CSV {}: {}", self.filename, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignRow, FieldValue};

    fn campaign(id: u64) -> CampaignRow {
        CampaignRow {
            id,
            campaign: format!("Campaign {}", id),
            channel: "Search".to_string(),
            impressions: 100 * id,
            clicks: 10 * id,
            conversions: id,
            revenue: format!("${}", 10 * id),
            ctr: "10%".to_string(),
            conversion_rate: "10%".to_string(),
            status: "Active".to_string(),
            budget: None,
            spend: None,
            roas: None,
        }
    }

    #[test]
    fn test_whole_view_when_nothing_selected() {
        let rows = vec![campaign(1), campaign(2)];
        let view: Vec<&CampaignRow> = rows.iter().collect();
        let selected = select_export_rows(&view, &Selection::new()).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_empty_view_is_no_data() {
        let view: Vec<&CampaignRow> = Vec::new();
        assert!(matches!(select_export_rows(&view, &Selection::new()), Err(ExportError::NoData)));
    }

    #[test]
    fn test_job_with_explicit_headers() {
        let job = ExportJob::new(
            vec![campaign(1)],
            Some(vec!["id".into(), "campaign".into(), "revenue".into()]),
            "out.csv".into(),
        );
        let payload = job.build().unwrap();
        assert_eq!(payload.filename, "out.csv");
        assert_eq!(String::from_utf8(payload.bytes).unwrap(), "id,campaign,revenue\n1,Campaign 1,$10\n");
    }

    #[test]
    fn test_job_without_headers_renders_missing_as_empty() {
        let job = ExportJob::new(vec![campaign(2)], None, "out.csv".into());
        let text = String::from_utf8(job.build().unwrap().bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,campaign,channel,impressions,clicks,conversions,revenue,ctr,conversionRate,status,budget,spend,roas");
        assert_eq!(lines[1], "2,Campaign 2,Search,200,20,2,$20,10%,10%,Active,,,");
        assert_eq!(campaign(2).field("roas"), FieldValue::Missing);
    }
}
