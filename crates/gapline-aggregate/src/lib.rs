//! Session classification and per-day aggregation for gapline.
//!
//! This crate is a pure, synchronous transform: already-fetched minute
//! bars go in, one [`DailySummary`] per exchange-local calendar date
//! comes out. The stages are:
//!
//! - [`Session::classify`] - Wall-clock time to session bucket
//! - [`daily_summaries`] - Minute bars to per-day session extremes
//! - [`merge_official`] - Left join of the official daily open/close feed
//! - [`apply_gap_metrics`] - Day-over-day gap deltas
//!
//! [`summarize`] composes all four with the canonical exchange timezone.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/gapline-dev/gapline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod daily;
mod merge;
mod metrics;
mod session;

pub use daily::daily_summaries;
pub use merge::merge_official;
pub use metrics::apply_gap_metrics;
pub use session::Session;

use gapline_types::{DailySummary, OfficialBar, TradeBar};

/// Canonical exchange timezone for session boundaries (US equities).
pub const EXCHANGE_TZ: chrono_tz::Tz = chrono_tz::America::New_York;

/// Runs the full summarization pipeline over a month of minute bars.
///
/// Bars are bucketed by [`EXCHANGE_TZ`] civil time, reduced per day,
/// enriched with the official daily feed (pass an empty slice when the
/// feed is unavailable), and annotated with the gap deltas. Output is
/// ascending by date; an empty input yields an empty output.
#[must_use]
pub fn summarize(bars: &[TradeBar], official: &[OfficialBar]) -> Vec<DailySummary> {
    let mut summaries = daily_summaries(bars, EXCHANGE_TZ);
    merge_official(&mut summaries, official);
    apply_gap_metrics(&mut summaries);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn eastern_bar(
        day: u32,
        hour: u32,
        minute: u32,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> TradeBar {
        let timestamp = EXCHANGE_TZ
            .with_ymd_and_hms(2025, 8, day, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc);
        TradeBar::new(timestamp, open, high, low, close, 1000.0)
    }

    #[test]
    fn test_full_pipeline() {
        let bars = vec![
            // Day 4: pre, regular, after
            eastern_bar(4, 9, 0, 9.8, 10.0, 9.0, 9.9),
            eastern_bar(4, 10, 0, 9.5, 11.0, 9.0, 10.5),
            eastern_bar(4, 17, 0, 10.4, 10.8, 10.2, 10.6),
            // Day 5: regular and after only
            eastern_bar(5, 9, 30, 10.6, 10.9, 10.4, 10.7),
            eastern_bar(5, 16, 30, 10.7, 10.75, 10.1, 10.3),
        ];
        let official = vec![OfficialBar::new(
            NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            9.55,
            10.45,
        )];

        let summaries = summarize(&bars, &official);
        assert_eq!(summaries.len(), 2);

        let day4 = &summaries[0];
        assert_eq!(day4.date, NaiveDate::from_ymd_opt(2025, 8, 4).unwrap());
        // Official feed overrides the minute-aggregated open/close.
        assert_eq!(day4.open, Some(9.55));
        assert_eq!(day4.close, Some(10.45));
        assert_eq!(day4.after_low, Some(10.2));
        assert!((day4.after_low_minus_close.unwrap() - (10.2 - 10.45)).abs() < 1e-10);
        assert!(day4.pre_low_minus_prev_close.is_none());

        let day5 = &summaries[1];
        // No official bar for day 5: minute-aggregated values retained.
        assert_eq!(day5.open, Some(10.6));
        assert_eq!(day5.close, Some(10.7));
        assert!(day5.pre_low.is_none());
        assert!(day5.pre_low_minus_prev_close.is_none());
        assert!((day5.after_low_minus_close.unwrap() - (10.1 - 10.7)).abs() < 1e-10);
    }

    #[test]
    fn test_pipeline_without_official_feed() {
        let bars = vec![eastern_bar(4, 10, 0, 9.5, 11.0, 9.0, 10.5)];
        let summaries = summarize(&bars, &[]);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].open, Some(9.5));
        assert_eq!(summaries[0].close, Some(10.5));
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize(&[], &[]).is_empty());
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let bars = vec![
            eastern_bar(4, 9, 0, 9.8, 10.0, 9.0, 9.9),
            eastern_bar(4, 10, 0, 9.5, 11.0, 9.0, 10.5),
        ];
        assert_eq!(summarize(&bars, &[]), summarize(&bars, &[]));
    }
}
