use regex::Regex;
use std::sync::LazyLock;

static HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Clean up PDF extraction artifacts before pattern matching.
///
/// Carriage returns are dropped, non-breaking spaces become spaces, dash
/// variants (en dash, em dash, non-breaking hyphen) become `-`, and runs of
/// spaces/tabs collapse to one space. Line breaks are preserved.
pub fn normalize_text(text: &str) -> String {
    let mapped: String = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\u{00A0}' => ' ',
            '\u{2013}' | '\u{2014}' | '\u{2011}' => '-',
            other => other,
        })
        .collect();

    HORIZONTAL_WS.replace_all(&mapped, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_and_spaces() {
        let raw = "AD4050\u{00A0}\u{00A0}VCP \u{2013} REC\r\n06:00\u{2014}09:10\t\tx\u{2011}y";
        assert_eq!(normalize_text(raw), "AD4050 VCP - REC\n06:00-09:10 x-y");
    }

    #[test]
    fn test_keeps_blank_lines() {
        assert_eq!(normalize_text("a\n\n\nb"), "a\n\n\nb");
    }
}
