//! Per-day session summary record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One output record per exchange-local calendar date.
///
/// Every price field is optional: `None` means no bars fell in that
/// session on that day (or, for the deltas, that an input to the
/// difference was itself missing). Missing data propagates as `None`
/// through every downstream stage rather than raising.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Exchange-local calendar date (unique, ascending across a run).
    pub date: NaiveDate,
    /// Pre-market session high.
    pub pre_high: Option<f64>,
    /// Pre-market session low.
    pub pre_low: Option<f64>,
    /// Regular session high.
    pub regular_high: Option<f64>,
    /// Regular session low.
    pub regular_low: Option<f64>,
    /// After-hours session high.
    pub after_high: Option<f64>,
    /// After-hours session low.
    pub after_low: Option<f64>,
    /// Day open: first regular-session bar, or the official daily bar
    /// when the secondary feed has one for this date.
    pub open: Option<f64>,
    /// Day close: last regular-session bar, or the official daily bar
    /// when the secondary feed has one for this date.
    pub close: Option<f64>,
    /// After-hours low minus the same day's close.
    pub after_low_minus_close: Option<f64>,
    /// Pre-market low minus the previous day's close.
    pub pre_low_minus_prev_close: Option<f64>,
}

impl DailySummary {
    /// Creates an empty summary for the given date.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            pre_high: None,
            pre_low: None,
            regular_high: None,
            regular_low: None,
            after_high: None,
            after_low: None,
            open: None,
            close: None,
            after_low_minus_close: None,
            pre_low_minus_prev_close: None,
        }
    }

    /// Returns true if any session produced a high/low on this day.
    #[must_use]
    pub const fn has_session_data(&self) -> bool {
        self.pre_high.is_some() || self.regular_high.is_some() || self.after_high.is_some()
    }
}
