//! Polygon aggregates URL construction.

use gapline_types::MonthRange;

/// Base URL for the Polygon REST API.
pub const BASE_URL: &str = "https://api.polygon.io";

/// Builds the URL for one month of minute aggregates.
///
/// Endpoint:
/// `{BASE_URL}/v2/aggs/ticker/{SYMBOL}/range/1/minute/{START}/{END}`.
/// Results are adjusted, ascending, and capped at 50000 rows, which
/// covers a full month of extended-hours minute bars.
///
/// # Example
///
/// ```
/// use gapline_fetch::url::minute_aggs_url;
/// use gapline_types::MonthRange;
///
/// let month = MonthRange::new(2025, 8).unwrap();
/// let url = minute_aggs_url("aapl", month);
/// assert_eq!(
///     url,
///     "https://api.polygon.io/v2/aggs/ticker/AAPL/range/1/minute/2025-08-01/2025-08-31?adjusted=true&sort=asc&limit=50000"
/// );
/// ```
#[must_use]
pub fn minute_aggs_url(symbol: &str, month: MonthRange) -> String {
    format!(
        "{}/v2/aggs/ticker/{}/range/1/minute/{}/{}?adjusted=true&sort=asc&limit=50000",
        BASE_URL,
        symbol.to_uppercase(),
        month.first_day(),
        month.last_day()
    )
}

/// Builds the URL for one month of official daily aggregates.
#[must_use]
pub fn daily_aggs_url(symbol: &str, month: MonthRange) -> String {
    format!(
        "{}/v2/aggs/ticker/{}/range/1/day/{}/{}?adjusted=true&sort=asc&limit=50",
        BASE_URL,
        symbol.to_uppercase(),
        month.first_day(),
        month.last_day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_aggs_url() {
        let month = MonthRange::new(2025, 8).unwrap();
        let url = minute_aggs_url("aapl", month);
        assert_eq!(
            url,
            "https://api.polygon.io/v2/aggs/ticker/AAPL/range/1/minute/2025-08-01/2025-08-31?adjusted=true&sort=asc&limit=50000"
        );
    }

    #[test]
    fn test_daily_aggs_url() {
        let month = MonthRange::new(2024, 2).unwrap();
        let url = daily_aggs_url("TSLA", month);
        assert!(url.contains("/range/1/day/2024-02-01/2024-02-29?"));
    }

    #[test]
    fn test_symbol_uppercased() {
        let month = MonthRange::new(2025, 1).unwrap();
        assert!(minute_aggs_url("msft", month).contains("/ticker/MSFT/"));
    }
}
