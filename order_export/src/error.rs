//! Error types for order export and import correction

use mtg_common::MtgError;
use thiserror::Error;

/// Unified error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export requested with no records
    #[error("No articles to export")]
    Empty,

    /// A row field could not be interpreted
    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// Set mapping or shared type failure
    #[error(transparent)]
    Mtg(#[from] MtgError),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to parse row JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
