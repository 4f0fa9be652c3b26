//! Export payloads and the sinks that deliver them

use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::constants::CSV_MIME;
use crate::error::ExportError;

/// A finished export: file name, MIME type and bytes
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn csv(filename: impl Into<String>, content: String) -> Self {
        Self {
            filename: filename.into(),
            mime: CSV_MIME,
            bytes: content.into_bytes(),
        }
    }
}

/// `<base>-<YYYY-MM-DD>.csv`
pub fn export_filename(base: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", base, date.format("%Y-%m-%d"))
}

/// `<base>-complete.csv`, used by multi-section reports
pub fn complete_filename(base: &str) -> String {
    format!("{}-complete.csv", base)
}

/// Destination for finished exports
pub trait DownloadSink {
    /// Deliver a payload, returning where it ended up
    fn deliver(&mut self, payload: &ExportPayload) -> Result<PathBuf, ExportError>;
}

/// Writes payloads as files into a directory, creating it if needed
///
/// An existing file is never replaced; the payload lands at `name (1).csv`,
/// `name (2).csv` and so on instead.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Create the first free variant of `filename`
    fn create_unique(&self, filename: &str) -> Result<(PathBuf, File), ExportError> {
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (filename, None),
        };
        let mut n = 0u32;
        loop {
            let candidate = match (n, ext) {
                (0, _) => filename.to_string(),
                (_, Some(ext)) => format!("{} ({}).{}", stem, n, ext),
                (_, None) => format!("{} ({})", stem, n),
            };
            let path = self.dir.join(candidate);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, payload: &ExportPayload) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let (path, mut file) = self.create_unique(&payload.filename)?;
        file.write_all(&payload.bytes)?;
        debug!("Wrote {} bytes to {}", payload.bytes.len(), path.display());
        Ok(path)
    }
}

/// Keeps payloads in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub payloads: Vec<ExportPayload>,
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, payload: &ExportPayload) -> Result<PathBuf, ExportError> {
        self.payloads.push(payload.clone());
        Ok(PathBuf::from(&payload.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(export_filename("campaign-performance", date), "campaign-performance-2026-03-07.csv");
        assert_eq!(complete_filename("analytics-overview-30d"), "analytics-overview-30d-complete.csv");
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("exports"));
        let payload = ExportPayload::csv("a.csv", "x\n1\n".to_string());
        let path = sink.deliver(&payload).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x\n1\n");
        assert_eq!(payload.mime, CSV_MIME);
    }

    #[test]
    fn test_directory_sink_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let first = ExportPayload::csv("campaign-performance-2026-10-15.csv", "id\n1\n".to_string());
        let second = ExportPayload::csv("campaign-performance-2026-10-15.csv", "id\n2\n".to_string());

        let a = sink.deliver(&first).unwrap();
        let b = sink.deliver(&second).unwrap();
        assert_ne!(a, b);
        assert_eq!(b.file_name().unwrap(), "campaign-performance-2026-10-15 (1).csv");
        assert_eq!(std::fs::read_to_string(a).unwrap(), "id\n1\n");
        assert_eq!(std::fs::read_to_string(b).unwrap(), "id\n2\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }
}
