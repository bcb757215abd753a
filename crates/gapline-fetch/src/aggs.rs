//! High-level aggregate downloads.

use chrono_tz::Tz;
use gapline_types::{GaplineError, MonthRange, OfficialBar, Result, TradeBar};

use crate::client::FetchClient;
use crate::parse::{self, AggsResponse};
use crate::url;

/// Downloads one month of minute bars for a symbol.
///
/// # Errors
///
/// Returns [`GaplineError::NoData`] when the API reports no rows for
/// the month (unknown symbol, or a month with no trading), and
/// `Http`/`Parse` errors for transport and payload failures.
pub async fn fetch_minute_bars(
    client: &FetchClient,
    symbol: &str,
    month: MonthRange,
) -> Result<Vec<TradeBar>> {
    let response: AggsResponse = client
        .get_json(&url::minute_aggs_url(symbol, month))
        .await
        .map_err(|e| GaplineError::Http(e.to_string()))?;

    let bars = parse::trade_bars(&response).map_err(|e| GaplineError::Parse(e.to_string()))?;
    if bars.is_empty() {
        return Err(GaplineError::NoData {
            symbol: symbol.to_uppercase(),
        });
    }
    Ok(bars)
}

/// Downloads one month of official daily bars for a symbol, dated by
/// calendar day in `tz`.
///
/// An empty result is valid here: the summarizer degrades to the
/// minute-aggregated open/close when the official feed has nothing.
///
/// # Errors
///
/// Returns `Http`/`Parse` errors for transport and payload failures.
pub async fn fetch_official_bars(
    client: &FetchClient,
    symbol: &str,
    month: MonthRange,
    tz: Tz,
) -> Result<Vec<OfficialBar>> {
    let response: AggsResponse = client
        .get_json(&url::daily_aggs_url(symbol, month))
        .await
        .map_err(|e| GaplineError::Http(e.to_string()))?;

    parse::official_bars(&response, tz).map_err(|e| GaplineError::Parse(e.to_string()))
}
