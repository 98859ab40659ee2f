use crate::model::{PeriodInfo, RosterDate};
use crate::parsing::calendar::month_from_abbreviation;
use regex::Regex;
use std::sync::LazyLock;

/// Name returned when no crew name can be found.
pub const PLACEHOLDER_NAME: &str = "Tripulante";

/// Section marker printed by the English layout next to the crew name.
const SUMMARY_MARKER: &str = "escala summary";

static NAME_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)Tripulante[ \t]*:[ \t]*(.*?)$").unwrap());

static NAME_BEFORE_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+Escala Summary").unwrap());

// "Período: 01/08/2025 a 31/08/2025"
static PT_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Per[íi]odo:\s*(\d{2})/(\d{2})/(\d{4})\s+a\s+(\d{2})/(\d{2})/(\d{4})").unwrap()
});

// "Escala Summary 1 Aug - 31 Aug 2025"
static EN_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Escala Summary,?\s*(\d{1,2})\s+([A-Za-z]{3})\s*-\s*(\d{1,2})\s+([A-Za-z]{3})\s+(\d{4})",
    )
    .unwrap()
});

/// Crew name and reporting period of a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterHeader {
    pub name: String,
    pub period: PeriodInfo,
}

/// Extract the roster header from normalized text. Never fails: missing
/// fields fall back to the placeholder name and an empty period.
pub fn parse_header(text: &str) -> RosterHeader {
    RosterHeader {
        name: extract_name(text).unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
        period: extract_period(text),
    }
}

/// Crew name, upper-cased. Tries the `Tripulante:` field, then the text
/// in front of the "Escala Summary" marker.
pub fn extract_name(text: &str) -> Option<String> {
    let labeled = NAME_LABEL
        .captures(text)
        .map(|caps| caps[1].trim().to_uppercase())
        .filter(|name| !name.is_empty());
    if labeled.is_some() {
        return labeled;
    }

    let summary_line = text
        .lines()
        .find(|l| l.to_lowercase().contains(SUMMARY_MARKER))?
        .trim();
    NAME_BEFORE_SUMMARY
        .captures(summary_line)
        .map(|caps| caps[1].trim().to_uppercase())
        .filter(|name| !name.is_empty())
}

/// Reporting period. Tries the Portuguese `Período:` field, then the English
/// summary-header range. Returns an empty period when neither is present.
pub fn extract_period(text: &str) -> PeriodInfo {
    pt_period(text)
        .or_else(|| en_period(text))
        .unwrap_or_default()
}

fn pt_period(text: &str) -> Option<PeriodInfo> {
    let caps = PT_PERIOD.captures(text)?;
    let num = |i: usize| caps[i].parse::<u32>().ok();
    let start = RosterDate::new(num(1)?, num(2)?, caps[3].parse().ok()?);
    let end = RosterDate::new(num(4)?, num(5)?, caps[6].parse().ok()?);

    Some(PeriodInfo {
        start: Some(start),
        end: Some(end),
        reference_month: (1..=12)
            .contains(&start.month)
            .then(|| caps[2].to_string()),
        reference_year: Some(caps[3].to_string()),
    })
}

fn en_period(text: &str) -> Option<PeriodInfo> {
    let caps = EN_PERIOD.captures(text)?;
    let year: i32 = caps[5].parse().ok()?;
    let start_day: u32 = caps[1].parse().ok()?;
    let end_day: u32 = caps[3].parse().ok()?;

    // Each side falls back to the other's month when its own is unreadable.
    let start_month = month_from_abbreviation(&caps[2]);
    let end_month = month_from_abbreviation(&caps[4]);
    let (start_month, end_month) = match (start_month, end_month) {
        (Some(s), Some(e)) => (Some(s), Some(e)),
        (None, Some(e)) => (Some(e), Some(e)),
        (Some(s), None) => (Some(s), Some(s)),
        (None, None) => (None, None),
    };

    Some(PeriodInfo {
        start: start_month.map(|m| RosterDate::new(start_day, m, year)),
        end: end_month.map(|m| RosterDate::new(end_day, m, year)),
        reference_month: start_month.map(|m| format!("{m:02}")),
        reference_year: Some(caps[5].to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_from_label() {
        let text = "Azul Linhas Aereas\nTripulante: Maria da Silva \nBase: VCP\n";
        assert_eq!(extract_name(text).as_deref(), Some("MARIA DA SILVA"));
    }

    #[test]
    fn test_name_from_summary_line() {
        let text = "Report\n  John Smith Escala Summary 1 Aug - 31 Aug 2025\nSun, 3 August\n";
        assert_eq!(extract_name(text).as_deref(), Some("JOHN SMITH"));
    }

    #[test]
    fn test_blank_label_does_not_take_next_line() {
        let text = "JOHN SMITH Escala Summary 1 Aug - 31 Aug 2025\nTripulante:\nBase: GRU\n";
        assert_eq!(extract_name(text).as_deref(), Some("JOHN SMITH"));

        let text = "Tripulante:   \nBase: GRU\n";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn test_blank_label_falls_back_to_summary() {
        let text = "Jane Doe Escala Summary 1 Aug - 31 Aug 2025\nTripulante:   \n";
        assert_eq!(extract_name(text).as_deref(), Some("JANE DOE"));
    }

    #[test]
    fn test_placeholder_name() {
        let h = parse_header("nothing useful here");
        assert_eq!(h.name, PLACEHOLDER_NAME);
        assert_eq!(h.period, PeriodInfo::default());
    }

    #[test]
    fn test_pt_period() {
        let p = extract_period("Período: 01/08/2025 a 31/08/2025\n");
        assert_eq!(p.start, Some(RosterDate::new(1, 8, 2025)));
        assert_eq!(p.end, Some(RosterDate::new(31, 8, 2025)));
        assert_eq!(p.reference_month.as_deref(), Some("08"));
        assert_eq!(p.reference_year.as_deref(), Some("2025"));
    }

    #[test]
    fn test_pt_period_without_accent() {
        let p = extract_period("Periodo: 01/09/2025 a 30/09/2025");
        assert_eq!(p.reference_month.as_deref(), Some("09"));
    }

    #[test]
    fn test_pt_period_invalid_month_not_referenced() {
        let p = extract_period("Período: 01/13/2025 a 31/13/2025");
        assert!(p.start.is_some());
        assert_eq!(p.reference_month, None);
    }

    #[test]
    fn test_en_period() {
        let p = extract_period("JOHN SMITH Escala Summary 1 Aug - 31 Aug 2025");
        assert_eq!(p.start, Some(RosterDate::new(1, 8, 2025)));
        assert_eq!(p.end, Some(RosterDate::new(31, 8, 2025)));
        assert_eq!(p.reference_month.as_deref(), Some("08"));
        assert_eq!(p.start.unwrap().to_string(), "01/08/2025");
    }

    #[test]
    fn test_en_period_spanning_months() {
        let p = extract_period("Escala Summary, 28 Jul - 3 Aug 2025");
        assert_eq!(p.start, Some(RosterDate::new(28, 7, 2025)));
        assert_eq!(p.end, Some(RosterDate::new(3, 8, 2025)));
        assert_eq!(p.reference_month.as_deref(), Some("07"));
    }

    #[test]
    fn test_en_period_uses_end_month_when_start_unknown() {
        let p = extract_period("Escala Summary 1 Ago - 31 Aug 2025");
        assert_eq!(p.start, Some(RosterDate::new(1, 8, 2025)));
        assert_eq!(p.reference_month.as_deref(), Some("08"));
    }

    #[test]
    fn test_pt_period_takes_priority() {
        let text = "Período: 01/08/2025 a 31/08/2025\nEscala Summary 1 Sep - 30 Sep 2025";
        assert_eq!(extract_period(text).reference_month.as_deref(), Some("08"));
    }
}
