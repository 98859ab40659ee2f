//! `HH:MM` tokens and ranges as minute counts.

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse an `H:MM` / `HH:MM` duration into minutes.
///
/// Hours are not capped at 23 since block times and totals can exceed a day.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Parse a wall-clock time into minutes since midnight.
pub fn parse_clock(s: &str) -> Option<u32> {
    parse_hhmm(s).filter(|m| *m < MINUTES_PER_DAY)
}

/// Minutes from `start` to `end`, both minutes since midnight.
///
/// An end earlier than the start means the span crossed midnight.
pub fn span_minutes(start: u32, end: u32) -> u32 {
    if end < start {
        end + MINUTES_PER_DAY - start
    } else {
        end - start
    }
}

/// Duration of a `HH:MM - HH:MM` range.
pub fn parse_range(s: &str) -> Option<u32> {
    let (start, end) = s.split_once('-')?;
    Some(span_minutes(parse_clock(start)?, parse_clock(end)?))
}

/// Render minutes as `{H}h {MM}min`.
pub fn format_minutes(total: u32) -> String {
    format!("{}h {:02}min", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("01:30"), Some(90));
        assert_eq!(parse_hhmm("2:05"), Some(125));
        assert_eq!(parse_hhmm("36:00"), Some(2160));
        assert_eq!(parse_hhmm("1:5"), None);
        assert_eq!(parse_hhmm("01:75"), None);
        assert_eq!(parse_hhmm("abc"), None);
    }

    #[test]
    fn test_parse_clock_rejects_past_midnight() {
        assert_eq!(parse_clock("23:59"), Some(1439));
        assert_eq!(parse_clock("24:00"), None);
    }

    #[test]
    fn test_range_crossing_midnight() {
        assert_eq!(parse_range("23:30 - 00:15"), Some(45));
        assert_eq!(parse_range("06:00 - 09:10"), Some(190));
        assert_eq!(parse_range("10:00-10:00"), Some(0));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0h 00min");
        assert_eq!(format_minutes(90), "1h 30min");
        assert_eq!(format_minutes(605), "10h 05min");
    }
}
