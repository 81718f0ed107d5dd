//! Error types shared by the MTG tools

use thiserror::Error;

/// Unified error type for mapping files, catalog downloads and parsing
#[derive(Debug, Error)]
pub enum MtgError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to parse JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// A set mapping row is unusable
    #[error("Invalid set mapping on line {line}: {reason}")]
    InvalidMapping { line: u64, reason: String },
}

/// Result alias for shared MTG operations
pub type Result<T> = std::result::Result<T, MtgError>;
