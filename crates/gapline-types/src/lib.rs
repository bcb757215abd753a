//! Core types for the gapline session summary tool.
//!
//! This crate provides the fundamental data structures used throughout
//! gapline:
//!
//! - [`TradeBar`] - A single minute-level OHLCV observation
//! - [`OfficialBar`] - An official daily open/close from the secondary feed
//! - [`DailySummary`] - Per-day session extremes and derived deltas
//! - [`MonthRange`] - A validated calendar month for data retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gapline-dev/gapline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod error;
mod month;
mod summary;

pub use bar::{OfficialBar, TradeBar};
pub use error::{GaplineError, MonthError, Result};
pub use month::MonthRange;
pub use summary::DailySummary;
