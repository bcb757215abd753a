//! Day-over-day gap deltas.

use gapline_types::DailySummary;

/// Computes the cross-session gap deltas in one linear pass.
///
/// Requires the slice to be ascending by date (the aggregator and merge
/// stages both preserve that order):
///
/// - `after_low_minus_close` = same day's after-hours low minus close
/// - `pre_low_minus_prev_close` = pre-market low minus the previous
///   day's close; always `None` for the first day
///
/// A `None` on either side of a difference makes the delta `None`.
pub fn apply_gap_metrics(summaries: &mut [DailySummary]) {
    let mut prev_close: Option<f64> = None;

    for summary in summaries.iter_mut() {
        summary.after_low_minus_close = match (summary.after_low, summary.close) {
            (Some(after_low), Some(close)) => Some(after_low - close),
            _ => None,
        };
        summary.pre_low_minus_prev_close = match (summary.pre_low, prev_close) {
            (Some(pre_low), Some(close)) => Some(pre_low - close),
            _ => None,
        };
        prev_close = summary.close;
    }
}
