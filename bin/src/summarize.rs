//! Summarize command implementation.
//!
//! Fetches one month of minute and daily aggregates for a symbol and
//! prints or writes the per-day session summary.

use crate::display::{Format, print_table, write_summaries};
use anyhow::{Context, Result};
use chrono::Datelike;
use gapline_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Fetch and summarize one month of data for a symbol.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn run(
    symbol: &str,
    year: Option<i32>,
    month: u32,
    output: Option<PathBuf>,
    format: Format,
    api_key: Option<String>,
    no_official: bool,
    quiet: bool,
) -> Result<()> {
    let symbol = symbol.to_uppercase();
    let year = year.unwrap_or_else(|| chrono::Utc::now().year());
    let month = MonthRange::new(year, month)?;

    let api_key = api_key
        .or_else(|| std::env::var("GAPLINE_API_KEY").ok())
        .context("No API key: pass --api-key or set GAPLINE_API_KEY")?;
    let client = FetchClient::with_api_key(api_key)?;

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    spinner.set_message(format!("Fetching minute bars for {symbol} ({month})..."));
    let bars = fetch_minute_bars(&client, &symbol, month).await?;

    let official = if no_official {
        Vec::new()
    } else {
        spinner.set_message(format!("Fetching official daily bars for {symbol}..."));
        fetch_official_bars(&client, &symbol, month, EXCHANGE_TZ).await?
    };

    let summaries = summarize(&bars, &official);
    spinner.finish_and_clear();

    if summaries.is_empty() {
        println!("No data found for {symbol} in {month}.");
        return Ok(());
    }

    if !quiet {
        println!(
            "{} bars across {} days for {} ({})",
            bars.len(),
            summaries.len(),
            symbol,
            month
        );
    }

    match output {
        Some(path) => {
            write_summaries(&summaries, &path, format)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                println!("Output written to: {}", path.display());
            }
        }
        None => print_table(&summaries),
    }

    Ok(())
}
