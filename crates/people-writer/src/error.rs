//! Error types for the record writers.

use thiserror::Error;

/// Errors that can occur while serializing records.
#[derive(Error, Debug)]
pub enum WriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Delimited output needs a non-empty separator.
    #[error("CSV separator is empty")]
    EmptyDelimiter,
}
