use crate::model::{ComparisonRow, DayMap, RosterDate};
use std::collections::BTreeSet;

/// Line up two rosters day by day.
///
/// Rows cover the union of both date sets in chronological order. A side
/// with no entry for a date gets an empty string. When `reference_month`
/// is a non-empty two-digit month, only dates in that month are kept.
pub fn merge_days(
    left: &DayMap,
    right: &DayMap,
    reference_month: Option<&str>,
) -> Vec<ComparisonRow> {
    let month = reference_month.filter(|m| !m.is_empty());

    let dates: BTreeSet<RosterDate> = left.keys().chain(right.keys()).copied().collect();

    dates
        .into_iter()
        .filter(|date| month.map_or(true, |m| date.month_str() == m))
        .map(|date| ComparisonRow {
            date,
            activity_left: left.get(&date).cloned().unwrap_or_default(),
            activity_right: right.get(&date).cloned().unwrap_or_default(),
        })
        .collect()
}
