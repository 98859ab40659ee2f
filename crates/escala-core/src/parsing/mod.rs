pub mod calendar;
pub mod days;
pub mod duration;
pub mod flight;
pub mod header;
pub mod normalize;

use crate::model::ParsedRoster;
use days::extract_days;
use flight::aggregate_flight_time;
use header::parse_header;
use normalize::normalize_text;

/// Run every extractor over the raw text of one roster.
///
/// Never fails: whatever cannot be found comes back empty (no days, a
/// placeholder name, an empty period, a zero flight total).
pub fn parse_roster(raw_text: &str) -> ParsedRoster {
    let text = normalize_text(raw_text);

    let header = parse_header(&text);

    // Headers without a year take it from the document's own period
    let year = header
        .period
        .year()
        .unwrap_or_else(calendar::current_year);
    let days = extract_days(&text, year);

    let flight_total = aggregate_flight_time(&text);

    tracing::debug!(
        name = %header.name,
        period_start = ?header.period.start.map(|d| d.to_string()),
        reference_month = ?header.period.reference_month,
        days = days.len(),
        flight_total = %flight_total,
        "roster parsed"
    );

    ParsedRoster {
        name: header.name,
        period: header.period,
        days,
        flight_total,
    }
}
