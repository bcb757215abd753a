//! Error types for gapline.

use thiserror::Error;

/// Result type alias for gapline operations.
pub type Result<T> = std::result::Result<T, GaplineError>;

/// Errors that can occur while fetching and summarizing market data.
#[derive(Error, Debug)]
pub enum GaplineError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream payload could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid calendar month.
    #[error(transparent)]
    Month(#[from] MonthError),

    /// No data available for the requested symbol and month.
    #[error("No data available for {symbol} in requested month")]
    NoData {
        /// The symbol that had no data.
        symbol: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid calendar months.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// Month number outside 1-12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
}
