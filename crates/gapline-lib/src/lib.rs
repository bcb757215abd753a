//! Daily session extremes and extended-hours gap deltas for US equities.
//!
//! This is a facade crate that re-exports functionality from the
//! gapline workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use gapline_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::with_api_key("YOUR_API_KEY")?;
//!     let month = MonthRange::new(2025, 8)?;
//!
//!     let bars = fetch_minute_bars(&client, "AAPL", month).await?;
//!     let official = fetch_official_bars(&client, "AAPL", month, EXCHANGE_TZ).await?;
//!
//!     for day in summarize(&bars, &official) {
//!         println!("{} close {:?}", day.date, day.close);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gapline-dev/gapline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use gapline_types::*;

// Re-export the summarization engine
#[cfg(feature = "aggregate")]
pub use gapline_aggregate::{
    EXCHANGE_TZ, Session, apply_gap_metrics, daily_summaries, merge_official, summarize,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use gapline_fetch::{
    ClientConfig, FetchClient, FetchError, fetch_minute_bars, fetch_official_bars,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use gapline_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use gapline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use gapline_types::{
        DailySummary, GaplineError, MonthRange, OfficialBar, Result, TradeBar,
    };

    #[cfg(feature = "aggregate")]
    pub use gapline_aggregate::{EXCHANGE_TZ, Session, summarize};

    #[cfg(feature = "fetch")]
    pub use gapline_fetch::{
        ClientConfig, FetchClient, fetch_minute_bars, fetch_official_bars,
    };

    #[cfg(feature = "format")]
    pub use gapline_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
