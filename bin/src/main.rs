//! gapline CLI - daily session highs/lows and extended-hours gap deltas.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod display;
mod summarize;

use display::Format;

#[derive(Parser)]
#[command(name = "gapline")]
#[command(
    about = "Daily session highs/lows and extended-hours gap deltas for a stock symbol",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Stock symbol (e.g. AAPL)
    symbol: String,

    /// Year of the month to summarize. Defaults to the current year.
    #[arg(short, long)]
    year: Option<i32>,

    /// Month number (1-12)
    #[arg(short, long, default_value_t = 8)]
    month: u32,

    /// Output file path. Prints a table to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (used with --output)
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Polygon API key. Falls back to the GAPLINE_API_KEY environment
    /// variable.
    #[arg(long)]
    api_key: Option<String>,

    /// Skip the official daily feed and keep the minute-aggregated
    /// open/close
    #[arg(long)]
    no_official: bool,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    summarize::run(
        &cli.symbol,
        cli.year,
        cli.month,
        cli.output,
        cli.format,
        cli.api_key,
        cli.no_official,
        cli.quiet,
    )
    .await
}
