//! Table controller - owns one table's view state over immutable rows
//!
//! Mutators compute the next [`TableViewState`] with pure transitions and store it.
//! The page index is clamped to `[1, total_pages]` after every filter or sort change.

use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::filters::{filter_rows, unique_values};
use super::pagination::{page_range, paginate, total_pages, PageRange};
use super::sorting::sort_rows;
use super::state::{TableOptions, TableViewState};
use super::types::{CategoryFilter, ExportState, ViewMode};
use crate::error::{ExportError, TableError};
use crate::export::{export_filename, select_export_rows, DownloadSink, ExportJob};
use crate::models::{RowId, TableRow};

/// User intents collected while rendering, applied once the frame's borrows end
#[derive(Debug, Clone, PartialEq)]
pub enum TableCommand {
    Query(String),
    Category { field: String, filter: CategoryFilter },
    ClearFilters,
    Sort(String),
    GotoPage(usize),
    NextPage,
    PrevPage,
    ToggleRow(RowId),
    SelectAllVisible,
    ClearSelection,
    SetViewMode(ViewMode),
}

/// The filtered+sorted rows of a table plus the current page window
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<'a, R: TableRow> TableView<'a, R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows on the current page
    pub fn page_rows(&self) -> &[&'a R] {
        paginate(&self.rows, self.page_size, self.page)
    }

    pub fn page_range(&self) -> PageRange {
        page_range(self.rows.len(), self.page_size, self.page)
    }

    /// Ids of every row in the view, in view order
    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.row_id()).collect()
    }
}

/// Result of an export, ready to show to the user
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Exported { location: PathBuf, message: String },
    Failed { alert: String },
}

impl ExportOutcome {
    pub fn from_result(result: Result<PathBuf, ExportError>, success_message: &str) -> Self {
        match result {
            Ok(location) => {
                info!("{} ({})", success_message, location.display());
                ExportOutcome::Exported { location, message: success_message.to_string() }
            }
            Err(e) => {
                error!("Export error: {}", e);
                ExportOutcome::Failed { alert: format!("Export failed: {}", e) }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Exported { .. })
    }

    /// Status line on success, alert text on failure
    pub fn message(&self) -> &str {
        match self {
            ExportOutcome::Exported { message, .. } => message,
            ExportOutcome::Failed { alert } => alert,
        }
    }
}

pub struct TableController<R> {
    title: String,
    rows: Arc<[R]>,
    options: TableOptions,
    state: TableViewState,
}

impl<R: TableRow> TableController<R> {
    pub fn new(title: impl Into<String>, rows: impl Into<Arc<[R]>>, options: TableOptions) -> Result<Self, TableError> {
        options.validate()?;
        Ok(Self {
            title: title.into(),
            rows: rows.into(),
            options,
            state: TableViewState::default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The raw input, never reordered or mutated
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    /// Recompute the filtered+sorted view from the raw rows
    pub fn view(&self) -> TableView<'_, R> {
        let filtered = filter_rows(self.rows.iter(), &self.state.filter);
        let rows = sort_rows(filtered, &self.state.sort);
        debug!(
            table = %self.title,
            total = self.rows.len(),
            visible = rows.len(),
            "Recomputed table view"
        );
        TableView {
            total_pages: total_pages(rows.len(), self.options.page_size),
            rows,
            page: self.state.page,
            page_size: self.options.page_size,
        }
    }

    /// Distinct values offered by a category selector, taken from the raw rows
    pub fn category_options(&self, field: &str) -> Vec<String> {
        unique_values(self.rows.iter(), field)
    }

    pub fn is_exporting(&self) -> bool {
        self.state.export_state.is_busy()
    }

    fn transition(&mut self, f: impl FnOnce(TableViewState) -> TableViewState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    fn clamp_to_view(&mut self) {
        let count = filter_rows(self.rows.iter(), &self.state.filter).len();
        let page_size = self.options.page_size;
        self.transition(|s| s.clamp_page(count, page_size));
    }

    pub fn apply_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.transition(|s| s.apply_query(query));
        self.clamp_to_view();
    }

    pub fn apply_category(&mut self, field: &str, filter: CategoryFilter) {
        self.transition(|s| s.apply_category(field, filter));
        self.clamp_to_view();
    }

    pub fn clear_filters(&mut self) {
        self.transition(TableViewState::clear_filters);
        self.clamp_to_view();
    }

    pub fn apply_sort(&mut self, field: &str) {
        self.transition(|s| s.apply_sort(field));
        self.clamp_to_view();
    }

    pub fn goto_page(&mut self, page: usize) {
        self.transition(|s| s.goto_page(page));
        self.clamp_to_view();
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.state.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.state.page.saturating_sub(1));
    }

    pub fn toggle_selection(&mut self, id: RowId) {
        self.transition(|s| s.toggle_selection(id));
    }

    /// Toggle-all over the whole filtered+sorted view, not just the current page
    pub fn select_all_visible(&mut self) {
        let visible = self.view().ids();
        self.transition(|s| s.select_all_visible(&visible));
    }

    pub fn clear_selection(&mut self) {
        self.transition(TableViewState::clear_selection);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.transition(|s| s.with_view_mode(mode));
    }

    pub fn apply(&mut self, command: TableCommand) {
        match command {
            TableCommand::Query(query) => self.apply_query(query),
            TableCommand::Category { field, filter } => self.apply_category(&field, filter),
            TableCommand::ClearFilters => self.clear_filters(),
            TableCommand::Sort(field) => self.apply_sort(&field),
            TableCommand::GotoPage(page) => self.goto_page(page),
            TableCommand::NextPage => self.next_page(),
            TableCommand::PrevPage => self.prev_page(),
            TableCommand::ToggleRow(id) => self.toggle_selection(id),
            TableCommand::SelectAllVisible => self.select_all_visible(),
            TableCommand::ClearSelection => self.clear_selection(),
            TableCommand::SetViewMode(mode) => self.set_view_mode(mode),
        }
    }

    pub fn success_message(&self) -> String {
        format!("{} exported successfully", self.title)
    }
}

impl<R: TableRow + Clone> TableController<R> {
    /// Rows an export would contain right now: the selected rows of the view, or the whole view
    pub fn export_rows(&self) -> Result<Vec<R>, ExportError> {
        let view = self.view();
        let rows = select_export_rows(&view.rows, &self.state.selection)?;
        Ok(rows.into_iter().cloned().collect())
    }

    /// Enter `Exporting` and snapshot the rows to export
    ///
    /// A second request while exporting is rejected rather than queued. A request
    /// with nothing to export fails without leaving `Idle`.
    pub fn begin_export(&mut self, date: NaiveDate) -> Result<ExportJob<R>, ExportError> {
        if self.is_exporting() {
            warn!(table = %self.title, "Export requested while another export is running");
            return Err(ExportError::AlreadyExporting);
        }
        let rows = self.export_rows()?;
        self.transition(|s| s.with_export_state(ExportState::Exporting));
        Ok(ExportJob::new(
            rows,
            self.options.export_headers.clone(),
            export_filename(&self.options.export_base_name, date),
        ))
    }

    /// Return to `Idle` whatever the job's result was
    pub fn finish_export(&mut self, result: Result<PathBuf, ExportError>) -> ExportOutcome {
        self.transition(|s| s.with_export_state(ExportState::Idle));
        ExportOutcome::from_result(result, &self.success_message())
    }

    /// Run a whole export synchronously into `sink`
    pub fn export_with<S: DownloadSink + ?Sized>(&mut self, sink: &mut S, date: NaiveDate) -> ExportOutcome {
        match self.begin_export(date) {
            Ok(job) => {
                let result = job.run_into(sink);
                self.finish_export(result)
            }
            Err(e) => ExportOutcome::from_result(Err(e), &self.success_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;
    use crate::models::{FieldValue, Record};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        name: &'static str,
        status: &'static str,
    }

    impl Record for Row {
        fn field_names(&self) -> Vec<&str> {
            vec!["id", "name", "status"]
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "id" => self.id.into(),
                "name" => self.name.into(),
                "status" => self.status.into(),
                _ => FieldValue::Missing,
            }
        }
    }

    impl TableRow for Row {
        fn row_id(&self) -> RowId {
            self.id
        }
    }

    fn controller(count: u64, page_size: usize) -> TableController<Row> {
        let rows: Vec<Row> = (1..=count)
            .map(|id| Row {
                id,
                name: if id % 2 == 0 { "Even" } else { "Odd" },
                status: if id <= 3 { "Active" } else { "Paused" },
            })
            .collect();
        let options = TableOptions { page_size, ..TableOptions::advanced() };
        TableController::new("Campaigns", rows, options).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let options = TableOptions { page_size: 0, ..TableOptions::default() };
        let result = TableController::<Row>::new("t", Vec::new(), options);
        assert!(matches!(result, Err(TableError::InvalidPageSize)));
    }

    #[test]
    fn test_view_default_is_id_ascending() {
        let table = controller(12, 5);
        let view = table.view();
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page_rows().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_clamps_after_filter_narrows() {
        let mut table = controller(12, 5);
        table.goto_page(3);
        assert_eq!(table.state().page, 3);
        table.apply_category("status", CategoryFilter::Only("Active".into()));
        assert_eq!(table.state().page, 1);
        assert_eq!(table.view().page_rows().len(), 3);
    }

    #[test]
    fn test_goto_page_clamps_both_ends() {
        let mut table = controller(12, 5);
        table.goto_page(99);
        assert_eq!(table.state().page, 3);
        table.prev_page();
        table.prev_page();
        table.prev_page();
        assert_eq!(table.state().page, 1);
        table.next_page();
        assert_eq!(table.state().page, 2);
    }

    #[test]
    fn test_sort_toggle_and_reset() {
        let mut table = controller(4, 10);
        table.apply_sort("id");
        assert_eq!(table.view().ids(), vec![4, 3, 2, 1]);
        table.apply_sort("name");
        // "even" < "odd", equal keys keep id order
        assert_eq!(table.view().ids(), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_select_all_covers_whole_view() {
        let mut table = controller(12, 5);
        table.select_all_visible();
        assert_eq!(table.state().selection.len(), 12);
        table.select_all_visible();
        assert!(table.state().selection.is_empty());
    }

    #[test]
    fn test_selection_survives_filter_round_trip() {
        let mut table = controller(6, 5);
        table.toggle_selection(5);
        table.apply_query("even");
        assert!(!table.view().ids().contains(&5));
        table.apply_query("");
        assert!(table.state().selection.contains(5));
    }

    #[test]
    fn test_commands() {
        let mut table = controller(12, 5);
        table.apply(TableCommand::Query("odd".into()));
        table.apply(TableCommand::NextPage);
        table.apply(TableCommand::SetViewMode(ViewMode::Grid));
        assert_eq!(table.state().page, 2);
        assert_eq!(table.state().view_mode, ViewMode::Grid);
        table.apply(TableCommand::ClearFilters);
        assert!(!table.state().filter.is_active());
    }

    #[test]
    fn test_export_scoped_to_selection() {
        let mut table = controller(6, 5);
        table.toggle_selection(4);
        table.toggle_selection(2);
        table.apply_sort("id");
        let rows = table.export_rows().unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn test_export_with_only_stale_selection_fails() {
        let mut table = controller(6, 5);
        table.toggle_selection(1);
        table.apply_query("even");
        assert!(matches!(table.export_rows(), Err(ExportError::NoSelection)));
    }

    #[test]
    fn test_export_single_flight() {
        let mut table = controller(3, 5);
        let job = table.begin_export(date()).unwrap();
        assert!(table.is_exporting());
        assert_eq!(job.filename(), "campaign-performance-2026-10-15.csv");
        assert!(matches!(table.begin_export(date()), Err(ExportError::AlreadyExporting)));

        let outcome = table.finish_export(Err(ExportError::Sink("disk full".into())));
        assert!(!table.is_exporting());
        assert_eq!(outcome.message(), "Export failed: Download failed: disk full");
    }

    #[test]
    fn test_empty_export_does_not_enter_exporting() {
        let mut table = controller(3, 5);
        table.apply_query("nothing matches this");
        let mut sink = MemorySink::default();
        let outcome = table.export_with(&mut sink, date());
        assert_eq!(outcome, ExportOutcome::Failed { alert: "Export failed: No data to export".into() });
        assert!(!table.is_exporting());
        assert!(sink.payloads.is_empty());
    }

    #[test]
    fn test_export_with_delivers_payload() {
        let mut table = controller(2, 5);
        let mut sink = MemorySink::default();
        let outcome = table.export_with(&mut sink, date());
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "Campaigns exported successfully");
        let payload = &sink.payloads[0];
        assert_eq!(
            String::from_utf8(payload.bytes.clone()).unwrap(),
            "id,name,status\n1,Odd,Active\n2,Even,Active\n"
        );
    }
}
