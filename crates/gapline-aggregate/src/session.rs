//! Trading session classification.

use std::fmt;

/// Trading session bucket for a single minute bar.
///
/// Boundaries in exchange-local wall-clock time:
/// - `Pre`     : 04:00 - 09:29
/// - `Regular` : 09:30 - 16:00 (the 16:00 minute belongs to the regular
///   session, not after-hours)
/// - `After`   : 16:01 - 20:00
/// - `None`    : everything else (untracked)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Session {
    /// Pre-market session.
    Pre,
    /// Regular trading session.
    Regular,
    /// After-hours session.
    After,
    /// Outside any tracked session.
    None,
}

impl Session {
    /// Returns the lowercase name of the session.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Regular => "regular",
            Self::After => "after",
            Self::None => "none",
        }
    }

    /// Classifies an exchange-local wall-clock time into a session.
    ///
    /// Total over every valid `(hour, minute)` pair; hour/minute values
    /// outside their normal ranges are the caller's responsibility.
    #[must_use]
    pub const fn classify(hour: u32, minute: u32) -> Self {
        if hour < 4 || hour > 20 || (hour == 20 && minute > 0) {
            Self::None
        } else if hour < 9 || (hour == 9 && minute < 30) {
            Self::Pre
        } else if hour < 16 || (hour == 16 && minute == 0) {
            Self::Regular
        } else {
            Self::After
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
