//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be decoded as UTF-8
    #[error("Input is not valid UTF-8 (line {line})")]
    Encoding {
        /// 1-based line where decoding failed (0 when unknown)
        line: u64,
    },

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(csv::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] replen_core::Error),
}

impl From<csv::Error> for CsvError {
    /// Surface invalid UTF-8 as [`CsvError::Encoding`]; everything else
    /// passes through as a library error.
    fn from(err: csv::Error) -> Self {
        if matches!(err.kind(), csv::ErrorKind::Utf8 { .. }) {
            let line = err.position().map(|p| p.line()).unwrap_or(0);
            CsvError::Encoding { line }
        } else {
            CsvError::Csv(err)
        }
    }
}
