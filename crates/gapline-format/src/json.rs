//! JSON output format.

use gapline_types::DailySummary;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Missing prices and deltas serialize as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_summaries<W: Write + Send>(
        &self,
        summaries: &[DailySummary],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, summaries)?;
                } else {
                    serde_json::to_writer(&mut writer, summaries)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for summary in summaries {
                    serde_json::to_writer(&mut writer, summary)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn create_test_summary() -> DailySummary {
        let mut summary =
            DailySummary::empty(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap());
        summary.regular_high = Some(11.0);
        summary.close = Some(10.5);
        summary
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let summaries = vec![create_test_summary()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_summaries(&summaries, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"regular_high\":11.0"));
        assert!(result.contains("\"pre_high\":null"));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let summaries = vec![create_test_summary(), create_test_summary()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_summaries(&summaries, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let summaries = vec![create_test_summary()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_summaries(&summaries, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  "));
    }
}
