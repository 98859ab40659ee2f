use crate::model::{FlightStrategy, FlightTotal};
use crate::parsing::duration::{parse_hhmm, parse_range};
use regex::{Match, Regex};
use std::sync::LazyLock;

// Flight designator: two-letter carrier code followed by the flight number ("AD4050", "AD 4050").
// PDF text often glues it to its neighbours ("01/08/2025AD4050VCP"), so no word boundaries.
static FLIGHT_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{2} ?\d+").unwrap());

static FLIGHT_TIME_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Flight\s*Time:\s*(\d{1,2}:\d{2})").unwrap());

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{2} ?- ?\d{1,2}:\d{2}\b").unwrap());

/// Sum the flight time of a roster. Expects normalized text.
///
/// Strategies, first one with any hit wins:
/// 1. "Flight Time:" labels inside flight-code blocks
/// 2. "Flight Time:" labels anywhere
/// 3. `HH:MM - HH:MM` ranges following a flight code on the same line
///
/// Block scoping keeps a monthly summary section out of the total when the
/// per-flight labels are present.
pub fn aggregate_flight_time(text: &str) -> FlightTotal {
    let strategies: [(FlightStrategy, fn(&str) -> Vec<u32>); 3] = [
        (FlightStrategy::FlightCodeBlocks, block_label_minutes),
        (FlightStrategy::WholeDocument, labeled_minutes),
        (FlightStrategy::TimeRanges, range_minutes),
    ];

    for (strategy, collect) in strategies {
        let fragments = collect(text);
        if !fragments.is_empty() {
            let total = FlightTotal {
                minutes: fragments.iter().sum(),
                fragments: fragments.len(),
                strategy,
            };
            tracing::debug!(
                strategy = %strategy,
                fragments = total.fragments,
                minutes = total.minutes,
                "flight time aggregated"
            );
            return total;
        }
    }

    tracing::debug!("no flight time found");
    FlightTotal::default()
}

/// Flight codes in `text`. A code must not continue an uppercase word, so the
/// "EC 06" inside "REC 06:00" is not one.
fn flight_codes(text: &str) -> Vec<Match<'_>> {
    FLIGHT_CODE
        .find_iter(text)
        .filter(|m| {
            text[..m.start()]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_ascii_uppercase())
        })
        .collect()
}

/// Blocks start at a flight code and run to the next flight code, a blank
/// line, or the end of text, whichever comes first.
fn flight_blocks(text: &str) -> Vec<&str> {
    let anchors = flight_codes(text);
    anchors
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let limit = anchors.get(i + 1).map_or(text.len(), |next| next.start());
            let end = BLANK_RUN
                .find(&text[anchor.end()..limit])
                .map_or(limit, |blank| anchor.end() + blank.start());
            &text[anchor.start()..end]
        })
        .collect()
}

fn labeled_minutes(text: &str) -> Vec<u32> {
    FLIGHT_TIME_LABEL
        .captures_iter(text)
        .filter_map(|caps| parse_hhmm(&caps[1]))
        .collect()
}

fn block_label_minutes(text: &str) -> Vec<u32> {
    flight_blocks(text)
        .into_iter()
        .flat_map(labeled_minutes)
        .collect()
}

fn range_minutes(text: &str) -> Vec<u32> {
    let mut out = Vec::new();
    for line in text.lines() {
        let anchors = flight_codes(line);
        for (i, anchor) in anchors.iter().enumerate() {
            let limit = anchors.get(i + 1).map_or(line.len(), |next| next.start());
            if let Some(minutes) = TIME_RANGE
                .find(&line[anchor.end()..limit])
                .and_then(|range| parse_range(range.as_str()))
            {
                out.push(minutes);
            }
        }
    }
    out
}
