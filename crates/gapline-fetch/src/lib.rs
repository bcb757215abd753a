//! Polygon.io data fetching for gapline.
//!
//! This crate supplies the two input feeds the summarization engine
//! consumes:
//!
//! - [`fetch_minute_bars`] - Minute aggregates for a symbol and month
//! - [`fetch_official_bars`] - Official daily open/close bars
//! - [`FetchClient`] - HTTP client with retries and backoff
//! - [`url`] - Polygon aggregates URL construction

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gapline-dev/gapline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggs;
mod client;
mod parse;
pub mod url;

pub use aggs::{fetch_minute_bars, fetch_official_bars};
pub use client::{ClientConfig, FetchClient, FetchError};
pub use parse::{AggPayload, AggsResponse, ParseError, official_bars, trade_bars};
