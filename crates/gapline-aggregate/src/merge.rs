//! Merging the official daily feed into aggregated summaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use gapline_types::{DailySummary, OfficialBar};

/// Left-joins official daily bars into the summaries by date.
///
/// Where a summary's date has a matching official bar, its `open` and
/// `close` are overwritten: the official daily bar is authoritative
/// over the minute-aggregated regular session. Summaries without a
/// match keep whatever the aggregator computed, and official bars
/// without a matching summary are ignored. Every summary survives, and
/// the ascending date order is untouched.
pub fn merge_official(summaries: &mut [DailySummary], official: &[OfficialBar]) {
    let by_date: BTreeMap<NaiveDate, &OfficialBar> =
        official.iter().map(|bar| (bar.date, bar)).collect();

    for summary in summaries.iter_mut() {
        if let Some(bar) = by_date.get(&summary.date) {
            summary.open = Some(bar.open);
            summary.close = Some(bar.close);
        }
    }
}
