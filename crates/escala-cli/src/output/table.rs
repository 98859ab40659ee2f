use escala_core::model::{Comparison, ParsedRoster};

/// Widest activity column before text is cut.
const MAX_ACTIVITY_WIDTH: usize = 48;

pub fn print_roster(roster: &ParsedRoster) {
    print!("{}", format_roster(roster));
}

pub fn print_comparison(comparison: &Comparison) {
    print!("{}", format_comparison(comparison));
}

pub fn format_roster(roster: &ParsedRoster) -> String {
    let mut out = String::new();
    let period = &roster.period;

    out.push_str(&format!("=== {} ===\n\n", roster.name));
    match (period.start, period.end) {
        (Some(start), Some(end)) => out.push_str(&format!("  Period:      {start} - {end}\n")),
        _ => out.push_str("  Period:      (not found)\n"),
    }
    if let Some(month) = &period.reference_month {
        out.push_str(&format!(
            "  Reference:   {}/{}\n",
            month,
            period.reference_year.as_deref().unwrap_or("?")
        ));
    }
    out.push_str(&format!(
        "  Flight time: {} ({} fragment(s), {})\n\n",
        roster.flight_total, roster.flight_total.fragments, roster.flight_total.strategy
    ));

    if roster.days.is_empty() {
        out.push_str("  No days found.\n");
        return out;
    }

    for (date, text) in &roster.days {
        let text = if text.is_empty() { "-" } else { text.as_str() };
        out.push_str(&format!("  {date}  {text}\n"));
    }

    out
}

pub fn format_comparison(cmp: &Comparison) -> String {
    let mut out = String::new();

    let left_width = cmp
        .rows
        .iter()
        .map(|r| cell(&r.activity_left).chars().count())
        .chain(std::iter::once(cmp.name1.chars().count()))
        .max()
        .unwrap_or(0);

    out.push_str(&format!(
        "  {:<10}  {:<width$}  {}\n",
        "Date",
        cmp.name1,
        cmp.name2,
        width = left_width
    ));

    for row in &cmp.rows {
        let marker = if row.activity_left == row.activity_right {
            " "
        } else {
            "*"
        };
        out.push_str(&format!(
            "{} {}  {:<width$}  {}\n",
            marker,
            row.date,
            cell(&row.activity_left),
            cell(&row.activity_right),
            width = left_width
        ));
    }

    out.push_str(&format!(
        "\n  Flight time: {} = {}, {} = {}\n",
        cmp.name1, cmp.flight_total1, cmp.name2, cmp.flight_total2
    ));
    if !cmp.month1.is_empty() || !cmp.month2.is_empty() {
        out.push_str(&format!(
            "  Reference month: {} / {}\n",
            or_dash(&cmp.month1),
            or_dash(&cmp.month2)
        ));
    }

    out
}

fn cell(text: &str) -> String {
    if text.is_empty() {
        return "-".to_string();
    }
    if text.chars().count() <= MAX_ACTIVITY_WIDTH {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_ACTIVITY_WIDTH - 3).collect();
    format!("{cut}...")
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escala_core::compare_texts;
    use escala_core::CompareOptions;

    #[test]
    fn test_format_comparison_marks_differences() {
        let cmp = compare_texts(
            "Tripulante: Ana\n01/08/2025\nFOLGA\n02/08/2025\nAD4050\n",
            "Tripulante: Bia\n01/08/2025\nFOLGA\n",
            &CompareOptions::default(),
        );
        let table = format_comparison(&cmp);
        assert!(table.contains("  01/08/2025  FOLGA"));
        assert!(table.contains("* 02/08/2025  AD4050"));
        assert!(table.contains("ANA = 0h 00min"));
    }

    #[test]
    fn test_cell_truncates_long_text() {
        let long = "x".repeat(100);
        assert_eq!(cell(&long).chars().count(), MAX_ACTIVITY_WIDTH);
        assert_eq!(cell(""), "-");
    }

    #[test]
    fn test_format_roster_without_days() {
        let roster = escala_core::parse_text("");
        let out = format_roster(&roster);
        assert!(out.contains("=== Tripulante ==="));
        assert!(out.contains("(not found)"));
        assert!(out.contains("No days found."));
    }
}
