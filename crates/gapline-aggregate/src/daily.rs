//! Daily aggregation of minute bars into session extremes.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Tz;
use gapline_types::{DailySummary, TradeBar};

use crate::Session;

/// Groups minute bars by exchange-local calendar date and reduces each
/// group into per-session high/low extremes plus the regular-session
/// open and close.
///
/// Each bar's UTC timestamp is converted to civil time in `tz` once,
/// classified once, and folded into its day's builder in a single pass.
/// Every distinct local date in the input yields a record, even when
/// all of its bars fall outside the tracked sessions; the resulting
/// record just carries no prices. Output is ascending by date.
///
/// The derived delta fields are left unset here; see
/// [`apply_gap_metrics`](crate::apply_gap_metrics).
#[must_use]
pub fn daily_summaries(bars: &[TradeBar], tz: Tz) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DayBuilder> = BTreeMap::new();

    for bar in bars {
        let local = bar.timestamp.with_timezone(&tz).naive_local();
        let session = Session::classify(local.hour(), local.minute());
        days.entry(local.date())
            .or_insert_with(DayBuilder::new)
            .update(session, local, bar);
    }

    days.into_iter()
        .map(|(date, builder)| builder.finish(date))
        .collect()
}

/// Running high/low extremes for one session of one day.
#[derive(Debug, Default)]
struct Extremes {
    high: Option<f64>,
    low: Option<f64>,
}

impl Extremes {
    fn update(&mut self, bar: &TradeBar) {
        self.high = Some(self.high.map_or(bar.high, |h| h.max(bar.high)));
        self.low = Some(self.low.map_or(bar.low, |l| l.min(bar.low)));
    }
}

/// Accumulator for one exchange-local calendar date.
#[derive(Debug)]
struct DayBuilder {
    pre: Extremes,
    regular: Extremes,
    after: Extremes,
    // First and last regular-session bar, tracked by local timestamp so
    // the result does not depend on input order.
    first_regular: Option<(NaiveDateTime, f64)>,
    last_regular: Option<(NaiveDateTime, f64)>,
}

impl DayBuilder {
    fn new() -> Self {
        Self {
            pre: Extremes::default(),
            regular: Extremes::default(),
            after: Extremes::default(),
            first_regular: None,
            last_regular: None,
        }
    }

    fn update(&mut self, session: Session, local: NaiveDateTime, bar: &TradeBar) {
        match session {
            Session::Pre => self.pre.update(bar),
            Session::Regular => {
                self.regular.update(bar);
                if self.first_regular.is_none_or(|(ts, _)| local < ts) {
                    self.first_regular = Some((local, bar.open));
                }
                if self.last_regular.is_none_or(|(ts, _)| local > ts) {
                    self.last_regular = Some((local, bar.close));
                }
            }
            Session::After => self.after.update(bar),
            Session::None => {}
        }
    }

    fn finish(self, date: NaiveDate) -> DailySummary {
        DailySummary {
            date,
            pre_high: self.pre.high,
            pre_low: self.pre.low,
            regular_high: self.regular.high,
            regular_low: self.regular.low,
            after_high: self.after.high,
            after_low: self.after.low,
            open: self.first_regular.map(|(_, open)| open),
            close: self.last_regular.map(|(_, close)| close),
            after_low_minus_close: None,
            pre_low_minus_prev_close: None,
        }
    }
}
