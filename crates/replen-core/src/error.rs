//! Error types for replen-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in replen-core
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required columns are missing from the input table
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A field expected to be numeric could not be interpreted as a number
    #[error("Row {row}: column '{column}' is not numeric: '{value}'")]
    InvalidNumber {
        /// 0-based data row index (header excluded)
        row: usize,
        /// Column header the value came from
        column: String,
        /// Display rendering of the offending cell
        value: String,
    },

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (count: {1})")]
    RowOutOfBounds(usize, usize),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
