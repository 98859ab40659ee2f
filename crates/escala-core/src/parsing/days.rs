use crate::model::{DayMap, RosterDate};
use crate::parsing::calendar::month_from_name;
use regex::Regex;
use std::sync::LazyLock;

/// Separator between the activity lines of one day.
pub const ACTIVITY_DELIMITER: &str = " | ";

// "01/08/2025 ..."
static BR_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})").unwrap());

// "Fri, 1 August ..."
static EN_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Sun|Mon|Tue|Wed|Thu|Fri|Sat),\s+(\d{1,2})\s+(January|February|March|April|May|June|July|August|September|October|November|December)",
    )
    .unwrap()
});

// Day-number suffixes that the PDF text layer splits onto their own line.
static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:st|nd|rd|th)$").unwrap());

static FLIGHT_TIME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Flight\s*Time:.*").unwrap());

/// Recognizes one style of day-header line.
pub trait DayHeaderRecognizer: Send + Sync {
    /// Short name of the header style (for diagnostics).
    fn name(&self) -> &'static str;

    /// The date a header line opens, or None if the line is not this kind
    /// of header. `year` is used when the header itself has no year.
    fn recognize(&self, line: &str, year: i32) -> Option<RosterDate>;
}

/// `DD/MM/YYYY` at the start of the line (Portuguese layout).
pub struct BrDateHeader;

impl DayHeaderRecognizer for BrDateHeader {
    fn name(&self) -> &'static str {
        "br-date"
    }

    fn recognize(&self, line: &str, _year: i32) -> Option<RosterDate> {
        let caps = BR_DATE.captures(line)?;
        Some(RosterDate::new(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ))
    }
}

/// `Dow, D Month` at the start of the line (English layout, no year).
pub struct EnWeekdayHeader;

impl DayHeaderRecognizer for EnWeekdayHeader {
    fn name(&self) -> &'static str {
        "en-weekday"
    }

    fn recognize(&self, line: &str, year: i32) -> Option<RosterDate> {
        let caps = EN_WEEKDAY.captures(line)?;
        let day = caps[1].parse().ok()?;
        let month = month_from_name(&caps[2]).unwrap_or(1);
        Some(RosterDate::new(day, month, year))
    }
}

/// What a single line of roster text means to the day scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    DayHeader {
        date: RosterDate,
        style: &'static str,
    },
    Activity(&'a str),
    /// Blank lines and stray ordinal suffixes.
    Ignored,
}

/// Tries each recognizer in order; the first match wins.
pub struct LineClassifier {
    recognizers: Vec<Box<dyn DayHeaderRecognizer>>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        LineClassifier {
            recognizers: vec![Box::new(BrDateHeader), Box::new(EnWeekdayHeader)],
        }
    }
}

impl LineClassifier {
    /// Append a recognizer with the lowest priority.
    pub fn with(mut self, recognizer: Box<dyn DayHeaderRecognizer>) -> Self {
        self.recognizers.push(recognizer);
        self
    }

    pub fn classify<'a>(&self, line: &'a str, year: i32) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() || ORDINAL_SUFFIX.is_match(trimmed) {
            return LineClass::Ignored;
        }

        for r in &self.recognizers {
            if let Some(date) = r.recognize(trimmed, year) {
                return LineClass::DayHeader {
                    date,
                    style: r.name(),
                };
            }
        }

        LineClass::Activity(trimmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NoCurrentDay,
    Accumulating(RosterDate),
}

/// Collects activity lines under the most recent day header.
#[derive(Debug)]
pub struct DayAccumulator {
    state: ScanState,
    days: DayMap,
}

impl Default for DayAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DayAccumulator {
    pub fn new() -> Self {
        DayAccumulator {
            state: ScanState::NoCurrentDay,
            days: DayMap::new(),
        }
    }

    pub fn current_day(&self) -> Option<RosterDate> {
        match self.state {
            ScanState::NoCurrentDay => None,
            ScanState::Accumulating(date) => Some(date),
        }
    }

    /// Switch to `date`. A date seen before keeps its existing text.
    pub fn start_day(&mut self, date: RosterDate) {
        self.days.entry(date).or_default();
        self.state = ScanState::Accumulating(date);
    }

    /// Append a line to the current day. Returns false if there is no
    /// current day yet and the line was discarded.
    pub fn push_activity(&mut self, line: &str) -> bool {
        let ScanState::Accumulating(date) = self.state else {
            return false;
        };
        let text = self.days.entry(date).or_default();
        if !text.is_empty() {
            text.push_str(ACTIVITY_DELIMITER);
        }
        text.push_str(line);
        true
    }

    pub fn feed(&mut self, class: LineClass<'_>) {
        match class {
            LineClass::DayHeader { date, .. } => self.start_day(date),
            LineClass::Activity(line) => {
                self.push_activity(line);
            }
            LineClass::Ignored => {}
        }
    }

    /// Finish scanning and clean up each day's text.
    pub fn finish(self) -> DayMap {
        self.days
            .into_iter()
            .map(|(date, text)| (date, clean_activity(&text)))
            .collect()
    }
}

/// Drop "Flight Time: ..." fields and the segments they leave empty. A
/// segment is one source line, so pipes printed inside a line survive.
fn clean_activity(text: &str) -> String {
    text.split(ACTIVITY_DELIMITER)
        .map(|segment| FLIGHT_TIME_FIELD.replace(segment, "").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(ACTIVITY_DELIMITER)
}

/// Split roster text into per-day activity text using the default header styles.
///
/// `year` fills in headers that do not print one.
pub fn extract_days(text: &str, year: i32) -> DayMap {
    extract_days_with(&LineClassifier::default(), text, year)
}

pub fn extract_days_with(classifier: &LineClassifier, text: &str, year: i32) -> DayMap {
    let mut acc = DayAccumulator::new();
    for line in text.lines() {
        acc.feed(classifier.classify(line, year));
    }
    acc.finish()
}
