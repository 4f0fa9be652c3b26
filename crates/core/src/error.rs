//! Error types for the table engine and export

use thiserror::Error;

/// Errors raised while exporting a table or report
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export")]
    NoData,

    #[error("No data selected for export")]
    NoSelection,

    #[error("An export is already in progress")]
    AlreadyExporting,

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Download failed: {0}")]
    Sink(String),
}

/// Errors raised while building tables or loading their data
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Failed to parse mock data: {0}")]
    MockData(#[from] serde_json::Error),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let err: ExportError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, ExportError::Encoding(_)));
        assert!(err.to_string().starts_with("Export output is not valid UTF-8"));
    }

    #[test]
    fn test_alert_messages() {
        assert_eq!(ExportError::NoData.to_string(), "No data to export");
        assert_eq!(ExportError::AlreadyExporting.to_string(), "An export is already in progress");
    }
}
