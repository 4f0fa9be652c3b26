//! Export orchestration: worker threads and per-frame polling

use analytix_core::{
    advanced_report_sections, analytics_overview_sections, export_report, DirectorySink, ExportError, ExportOutcome,
    ReportSection,
};
use chrono::Local;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

use super::{AnalytixApp, TableId};

pub(crate) type ExportReceiver = Receiver<Result<PathBuf, ExportError>>;

/// Run an export on a worker thread; the result arrives on the returned receiver
pub(crate) fn spawn_export<F>(task: F) -> ExportReceiver
where
    F: FnOnce() -> Result<PathBuf, ExportError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(task());
    });
    rx
}

/// Non-blocking check of an export receiver
fn poll(receiver: &ExportReceiver) -> Option<Result<PathBuf, ExportError>> {
    match receiver.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(ExportError::Sink("export worker stopped unexpectedly".to_string()))),
    }
}

impl AnalytixApp {
    /// Snapshot a table's export rows and write them on a worker thread
    pub(crate) fn start_table_export(&mut self, id: TableId) {
        let dir = self.config.export_dir();
        let today = Local::now().date_naive();
        let table = self.table_mut(id);
        let success_message = table.success_message();

        match table.begin_export(today) {
            Ok(job) => {
                debug!(rows = job.row_count(), file = job.filename(), "Starting table export");
                self.status = format!("Exporting {}...", job.filename());
                let receiver = spawn_export(move || job.run_into(&mut DirectorySink::new(dir)));
                *self.export_slot(id) = Some(receiver);
            }
            // Nothing started, so the table stays in whatever state it was in
            Err(e) => self.show_outcome(ExportOutcome::from_result(Err(e), &success_message)),
        }
    }

    pub(crate) fn start_overview_export(&mut self) {
        let period = self.period.code();
        let sections = analytics_overview_sections(&self.summary, &self.goals, period);
        self.start_report_export("Analytics overview", sections, format!("analytics-overview-{}", period));
    }

    pub(crate) fn start_advanced_report_export(&mut self) {
        let sections = advanced_report_sections(&self.performance, &self.charts);
        let base_name = format!("advanced-report-{}-{}", self.report_metric.code(), self.period.code());
        self.start_report_export("Advanced report", sections, base_name);
    }

    fn start_report_export(&mut self, title: &str, sections: Vec<ReportSection>, base_name: String) {
        if self.report_export.is_some() {
            warn!("Report export requested while another report export is running");
            self.show_outcome(ExportOutcome::from_result(Err(ExportError::AlreadyExporting), title));
            return;
        }
        let dir = self.config.export_dir();
        self.status = format!("Exporting {}...", title.to_lowercase());
        let receiver = spawn_export(move || export_report(&sections, &base_name, &mut DirectorySink::new(dir)));
        self.report_export = Some((title.to_string(), receiver));
    }

    /// Deliver finished export results; called once per frame
    pub(crate) fn check_exports(&mut self) {
        for id in TableId::ALL {
            let result = match self.export_slot(id).as_ref().and_then(poll) {
                Some(result) => result,
                None => continue,
            };
            *self.export_slot(id) = None;
            let outcome = self.table_mut(id).finish_export(result);
            self.show_outcome(outcome);
        }

        let finished = self
            .report_export
            .as_ref()
            .and_then(|(title, receiver)| poll(receiver).map(|result| (title.clone(), result)));
        if let Some((title, result)) = finished {
            self.report_export = None;
            let outcome = ExportOutcome::from_result(result, &format!("{} exported successfully", title));
            self.show_outcome(outcome);
        }
    }

    fn show_outcome(&mut self, outcome: ExportOutcome) {
        match outcome {
            ExportOutcome::Exported { location, message } => {
                self.status = format!("{} ({})", message, location.display());
            }
            ExportOutcome::Failed { alert } => {
                self.status = alert.clone();
                self.alert = Some(alert);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_spawn_export_delivers_result() {
        let receiver = spawn_export(|| Ok(PathBuf::from("out.csv")));
        let result = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.unwrap(), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_poll_reports_dropped_worker() {
        let (tx, rx) = mpsc::channel::<Result<PathBuf, ExportError>>();
        assert!(poll(&rx).is_none());
        drop(tx);
        assert!(matches!(poll(&rx), Some(Err(ExportError::Sink(_)))));
    }
}
