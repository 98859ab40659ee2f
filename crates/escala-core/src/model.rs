use crate::parsing::duration::format_minutes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A calendar day as printed on a roster (`DD/MM/YYYY`).
///
/// Field order makes the derived `Ord` chronological: year, then month, then day.
/// Values are kept as printed, so an impossible date like `31/02/2025` survives
/// extraction and still sorts between its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RosterDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl RosterDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        RosterDate { year, month, day }
    }

    /// Two-digit month, as used for reference-month filtering.
    pub fn month_str(&self) -> String {
        format!("{:02}", self.month)
    }
}

impl fmt::Display for RosterDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for RosterDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        let (Some(d), Some(m), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected DD/MM/YYYY, got '{s}'"));
        };
        let day = d.parse().map_err(|_| format!("invalid day in '{s}'"))?;
        let month = m.parse().map_err(|_| format!("invalid month in '{s}'"))?;
        let year = y.parse().map_err(|_| format!("invalid year in '{s}'"))?;
        Ok(RosterDate::new(day, month, year))
    }
}

impl Serialize for RosterDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RosterDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Reporting period found in a roster header. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub start: Option<RosterDate>,
    pub end: Option<RosterDate>,
    /// Always `01`..=`12` when present.
    pub reference_month: Option<String>,
    pub reference_year: Option<String>,
}

impl PeriodInfo {
    /// Year to assume for day headers that do not print one.
    pub fn year(&self) -> Option<i32> {
        self.start
            .map(|d| d.year)
            .or_else(|| self.reference_year.as_deref()?.parse().ok())
    }
}

/// Activity text per day, in chronological order. One entry per distinct date.
pub type DayMap = BTreeMap<RosterDate, String>;

/// Which aggregation strategy produced a flight total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStrategy {
    /// "Flight Time:" labels inside flight-code blocks.
    FlightCodeBlocks,
    /// "Flight Time:" labels anywhere in the document.
    WholeDocument,
    /// `HH:MM - HH:MM` ranges on flight-code lines.
    TimeRanges,
    #[default]
    None,
}

impl fmt::Display for FlightStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStrategy::FlightCodeBlocks => write!(f, "flight-code blocks"),
            FlightStrategy::WholeDocument => write!(f, "whole document"),
            FlightStrategy::TimeRanges => write!(f, "time ranges"),
            FlightStrategy::None => write!(f, "none"),
        }
    }
}

/// Total flight duration of one roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightTotal {
    pub minutes: u32,
    /// Number of time fragments that contributed to `minutes`.
    pub fragments: usize,
    pub strategy: FlightStrategy,
}

impl fmt::Display for FlightTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.minutes))
    }
}

/// Everything extracted from a single roster document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedRoster {
    pub name: String,
    pub period: PeriodInfo,
    pub days: DayMap,
    pub flight_total: FlightTotal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub date: RosterDate,
    pub activity_left: String,
    pub activity_right: String,
}

/// Aggregated response for one comparison request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    #[serde(rename = "escalas", alias = "comparisonRows")]
    pub rows: Vec<ComparisonRow>,
    pub name1: String,
    pub name2: String,
    pub month1: String,
    pub month2: String,
    #[serde(with = "flight_total_str")]
    pub flight_total1: FlightTotal,
    #[serde(with = "flight_total_str")]
    pub flight_total2: FlightTotal,
}

/// Flight totals travel as `"{H}h {MM}min"` strings.
mod flight_total_str {
    use super::FlightTotal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(total: &FlightTotal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(total)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FlightTotal, D::Error> {
        let s = String::deserialize(deserializer)?;
        let minutes = parse_formatted(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid flight total '{s}'")))?;
        Ok(FlightTotal {
            minutes,
            ..FlightTotal::default()
        })
    }

    fn parse_formatted(s: &str) -> Option<u32> {
        let (h, rest) = s.trim().split_once("h ")?;
        let m = rest.strip_suffix("min")?;
        Some(h.parse::<u32>().ok()? * 60 + m.parse::<u32>().ok()?)
    }
}
