//! Polygon aggregates payload parsing.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use gapline_types::{OfficialBar, TradeBar};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while interpreting an aggregates payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Timestamp does not map to a valid UTC instant.
    #[error("Invalid epoch milliseconds: {0}")]
    InvalidTimestamp(i64),
}

/// Response envelope of the `/v2/aggs` endpoints.
///
/// Only the fields gapline consumes are modeled; Polygon sends more
/// (`queryCount`, `request_id`, pagination cursors) that are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AggsResponse {
    /// Aggregate rows; absent in the payload when there is no data.
    #[serde(default)]
    pub results: Vec<AggPayload>,
    /// Number of rows returned.
    #[serde(rename = "resultsCount", default)]
    pub results_count: u64,
}

/// One aggregate row as delivered by Polygon.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AggPayload {
    /// Window start as epoch milliseconds (UTC).
    #[serde(rename = "t")]
    pub timestamp_ms: i64,
    /// Opening price.
    #[serde(rename = "o")]
    pub open: f64,
    /// Highest price.
    #[serde(rename = "h")]
    pub high: f64,
    /// Lowest price.
    #[serde(rename = "l")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "c")]
    pub close: f64,
    /// Traded volume; Polygon omits it on some index aggregates.
    #[serde(rename = "v", default)]
    pub volume: f64,
}

impl AggPayload {
    fn timestamp(&self) -> Result<DateTime<Utc>, ParseError> {
        Utc.timestamp_millis_opt(self.timestamp_ms)
            .single()
            .ok_or(ParseError::InvalidTimestamp(self.timestamp_ms))
    }
}

/// Converts a minute aggregates response into trade bars.
///
/// # Errors
///
/// Returns an error if a row carries an unrepresentable timestamp.
pub fn trade_bars(response: &AggsResponse) -> Result<Vec<TradeBar>, ParseError> {
    response
        .results
        .iter()
        .map(|row| {
            Ok(TradeBar::new(
                row.timestamp()?,
                row.open,
                row.high,
                row.low,
                row.close,
                row.volume,
            ))
        })
        .collect()
}

/// Converts a daily aggregates response into official bars.
///
/// Each row is dated by the exchange-local calendar date of its window
/// start, so the dates line up with the aggregation engine's keys.
///
/// # Errors
///
/// Returns an error if a row carries an unrepresentable timestamp.
pub fn official_bars(response: &AggsResponse, tz: Tz) -> Result<Vec<OfficialBar>, ParseError> {
    response
        .results
        .iter()
        .map(|row| {
            let date = row.timestamp()?.with_timezone(&tz).date_naive();
            Ok(OfficialBar::new(date, row.open, row.close))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono_tz::America::New_York;

    const MINUTE_PAYLOAD: &str = r#"{
        "ticker": "AAPL",
        "queryCount": 2,
        "resultsCount": 2,
        "adjusted": true,
        "results": [
            {"v": 1200, "o": 9.5, "c": 10.5, "h": 11.0, "l": 9.0, "t": 1754316000000, "n": 42},
            {"v": 800, "o": 10.5, "c": 10.6, "h": 10.7, "l": 10.4, "t": 1754316060000, "n": 17}
        ],
        "status": "OK",
        "request_id": "abc123"
    }"#;

    #[test]
    fn test_parse_minute_response() {
        let response: AggsResponse = serde_json::from_str(MINUTE_PAYLOAD).unwrap();
        assert_eq!(response.results_count, 2);

        let bars = trade_bars(&response).unwrap();
        assert_eq!(bars.len(), 2);
        assert!((bars[0].open - 9.5).abs() < 1e-10);
        assert!((bars[0].volume - 1200.0).abs() < 1e-10);
        // 1754316000000 ms = 2025-08-04 14:00:00 UTC
        assert_eq!(
            bars[0].timestamp,
            Utc.with_ymd_and_hms(2025, 8, 4, 14, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_results_field() {
        let response: AggsResponse =
            serde_json::from_str(r#"{"ticker": "AAPL", "status": "OK"}"#).unwrap();
        assert!(response.results.is_empty());
        assert!(trade_bars(&response).unwrap().is_empty());
    }

    #[test]
    fn test_missing_volume_defaults_to_zero() {
        let json = r#"{"results": [{"o": 1.0, "c": 1.0, "h": 1.0, "l": 1.0, "t": 0}]}"#;
        let response: AggsResponse = serde_json::from_str(json).unwrap();
        let bars = trade_bars(&response).unwrap();
        assert!((bars[0].volume - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_official_bars_dated_by_eastern_day() {
        // Polygon daily windows start at midnight Eastern; this is
        // 2025-08-04 00:00 EDT expressed as UTC milliseconds.
        let json = r#"{"results": [{"o": 9.55, "c": 10.45, "h": 10.8, "l": 9.4, "t": 1754280000000, "v": 5000000}]}"#;
        let response: AggsResponse = serde_json::from_str(json).unwrap();

        let bars = official_bars(&response, New_York).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2025, 8, 4).unwrap());
        assert!((bars[0].open - 9.55).abs() < 1e-10);
        assert!((bars[0].close - 10.45).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_timestamp() {
        let response = AggsResponse {
            results: vec![AggPayload {
                timestamp_ms: i64::MAX,
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
                volume: 0.0,
            }],
            results_count: 1,
        };
        assert!(matches!(
            trade_bars(&response),
            Err(ParseError::InvalidTimestamp(_))
        ));
    }
}
