use chrono::Datelike;

/// Three-letter English month abbreviations, January first.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Full English month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number (1-12) for an abbreviation like "Aug". Case-insensitive.
pub fn month_from_abbreviation(s: &str) -> Option<u32> {
    lookup(&MONTH_ABBREVIATIONS, s)
}

/// Month number (1-12) for a full name like "August". Case-insensitive.
pub fn month_from_name(s: &str) -> Option<u32> {
    lookup(&MONTH_NAMES, s)
}

fn lookup(table: &[&str; 12], s: &str) -> Option<u32> {
    let lower = s.trim().to_lowercase();
    table
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// Year used when a roster prints neither a period nor a year.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
