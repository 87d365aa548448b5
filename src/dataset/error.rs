//! Dataset error types
//!
//! Every variant is fatal at startup: the dashboard cannot render without its data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch table
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The input file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A data row could not be parsed
    #[error("Malformed row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Header or framing error reported by the CSV reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
