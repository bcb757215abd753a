//! Trade bar representations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single minute-level trade bar.
///
/// Timestamps are UTC instants as delivered by the upstream aggregates
/// feed; conversion to exchange-local civil time happens at aggregation
/// time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeBar {
    /// Bar start time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price of the minute.
    pub open: f64,
    /// Highest price during the minute.
    pub high: f64,
    /// Lowest price during the minute.
    pub low: f64,
    /// Closing price of the minute.
    pub close: f64,
    /// Traded volume during the minute.
    pub volume: f64,
}

impl TradeBar {
    /// Creates a new trade bar.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// An official daily bar from the secondary daily feed.
///
/// Carries only the fields the merge step consumes; the daily feed is
/// authoritative for open and close when a matching date exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfficialBar {
    /// Exchange-local calendar date of the bar.
    pub date: NaiveDate,
    /// Official opening price.
    pub open: f64,
    /// Official closing price.
    pub close: f64,
}

impl OfficialBar {
    /// Creates a new official daily bar.
    #[must_use]
    pub const fn new(date: NaiveDate, open: f64, close: f64) -> Self {
        Self { date, open, close }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_bar_range() {
        let bar = TradeBar::new(Utc::now(), 10.0, 11.5, 9.5, 10.8, 1200.0);
        assert!((bar.range() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_official_bar_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let bar = OfficialBar::new(date, 101.25, 103.5);
        assert_eq!(bar.date, date);
        assert!((bar.open - 101.25).abs() < 1e-10);
        assert!((bar.close - 103.5).abs() < 1e-10);
    }
}
