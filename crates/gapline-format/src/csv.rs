//! CSV output format.

use gapline_types::DailySummary;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Missing values render as empty fields so the column shape stays
/// fixed across days.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

/// Renders an optional price, empty when absent.
fn field(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

impl Formatter for CsvFormatter {
    fn write_summaries<W: Write + Send>(
        &self,
        summaries: &[DailySummary],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "date{d}pre_high{d}pre_low{d}regular_high{d}regular_low{d}after_high{d}after_low{d}open{d}close{d}after_low_minus_close{d}pre_low_minus_prev_close"
            )?;
        }

        for s in summaries {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                s.date,
                field(s.pre_high),
                field(s.pre_low),
                field(s.regular_high),
                field(s.regular_low),
                field(s.after_high),
                field(s.after_low),
                field(s.open),
                field(s.close),
                field(s.after_low_minus_close),
                field(s.pre_low_minus_prev_close),
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
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
        summary.regular_low = Some(9.0);
        summary.open = Some(9.5);
        summary.close = Some(10.5);
        summary
    }

    #[test]
    fn test_csv_summaries() {
        let formatter = CsvFormatter::new();
        let summaries = vec![create_test_summary()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_summaries(&summaries, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("date,pre_high,pre_low,regular_high"));
        assert!(result.contains("2025-08-04"));
        assert!(result.contains("11,9,"));
    }

    #[test]
    fn test_missing_values_are_empty_fields() {
        let formatter = CsvFormatter::new().with_header(false);
        let summaries = vec![create_test_summary()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_summaries(&summaries, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        // pre_high and pre_low are None.
        assert!(result.starts_with("2025-08-04,,,11,9"));
        // Trailing delta columns are None too.
        assert!(result.trim_end().ends_with("10.5,,"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let summaries = vec![create_test_summary()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_summaries(&summaries, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("date\tpre_high\tpre_low"));
    }
}
