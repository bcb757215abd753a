//! Calendar month range for data retrieval.

use chrono::{Datelike, NaiveDate};

use crate::MonthError;

/// A validated calendar month, the unit of data retrieval.
///
/// The fetch layer turns this into a closed `[first_day, last_day]`
/// date range for the upstream aggregates endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    year: i32,
    month: u32,
}

impl MonthRange {
    /// Creates a new month range, validating the month number.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not in `1..=12`.
    pub const fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if month == 0 || month > 12 {
            return Err(MonthError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid date")
    }

    /// Returns the last day of the month (leap-year aware).
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_first
            .and_then(|d| d.pred_opt())
            .expect("valid date")
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.last_day().day0() + 1
    }

    /// Returns true if the given date falls inside this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}

impl std::fmt::Display for MonthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
