//! Display utilities and output formatting for the gapline CLI.

use anyhow::Result;
use clap::ValueEnum;
use gapline_lib::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output format for summary files.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write daily summaries to a file in the specified format.
pub(crate) fn write_summaries(
    summaries: &[DailySummary],
    output: &Path,
    format: Format,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_summaries(summaries, writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_summaries(summaries, writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_summaries(summaries, writer)?;
        }
    }

    Ok(())
}

/// Renders a price cell, em-dash for missing values.
fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.2}"))
}

/// Print daily summaries as a fixed-width table on stdout.
pub(crate) fn print_table(summaries: &[DailySummary]) {
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>9} {:>11}",
        "Date",
        "PreHigh",
        "PreLow",
        "RegHigh",
        "RegLow",
        "AftHigh",
        "AftLow",
        "Open",
        "Close",
        "Aft-Close",
        "Pre-PrvCls"
    );

    for s in summaries {
        println!(
            "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>9} {:>11}",
            s.date.to_string(),
            cell(s.pre_high),
            cell(s.pre_low),
            cell(s.regular_high),
            cell(s.regular_low),
            cell(s.after_high),
            cell(s.after_low),
            cell(s.open),
            cell(s.close),
            cell(s.after_low_minus_close),
            cell(s.pre_low_minus_prev_close),
        );
    }
}
