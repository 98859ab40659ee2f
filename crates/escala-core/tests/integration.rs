//! Integration tests for compare_pdfs() end-to-end pipeline.
//!
//! Uses a MockExtractor that maps marker bytes to canned roster text
//! without invoking pdftotext, so these tests run without poppler-utils.

use escala_core::error::EscalaError;
use escala_core::extraction::TextExtractor;
use escala_core::model::{FlightStrategy, RosterDate};
use escala_core::{compare_pdfs, compare_texts, parse_text, CompareOptions};
use pretty_assertions::assert_eq;

const BR_ROSTER: &str = "\
Azul Linhas Aereas Brasileiras
Tripulante: Ana Souza
Período: 01/08/2025 a 31/08/2025
31/07/2025
AD4000 VCP-CNF 22:00 - 23:05
Flight Time: 1:05
01/08/2025
AD4050 VCP-REC 06:00 - 09:10
Flight Time: 3:10
AD4051 REC-VCP 10:30 - 13:40
Flight Time: 03:10

02/08/2025
FOLGA
05/08/2025
Reserva 08:00 - 14:00
";

const EN_ROSTER: &str = "\
Page 1
JOHN SMITH Escala Summary 1 Aug - 31 Aug 2025
Fri, 1 August
st
AD4050 VCP \u{2013} REC 06:00 \u{2013} 09:10
Flight Time: 03:10
Sun, 3 August
rd
Day Off
Mon, 1 September
AD4100 CNF-GRU
Flight Time: 01:05
";

struct MockExtractor;

impl TextExtractor for MockExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, EscalaError> {
        match pdf_bytes {
            b"br" => Ok(BR_ROSTER.to_string()),
            b"en" => Ok(EN_ROSTER.to_string()),
            b"empty" => Ok(String::new()),
            _ => Err(EscalaError::Extraction("not a PDF".into())),
        }
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn date(s: &str) -> RosterDate {
    s.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Portuguese layout on its own
// ---------------------------------------------------------------------------
#[test]
fn br_roster_extraction() {
    let roster = parse_text(BR_ROSTER);

    assert_eq!(roster.name, "ANA SOUZA");
    assert_eq!(roster.period.start, Some(date("01/08/2025")));
    assert_eq!(roster.period.end, Some(date("31/08/2025")));
    assert_eq!(roster.period.reference_month.as_deref(), Some("08"));

    assert_eq!(roster.days.len(), 4);
    assert_eq!(
        roster.days[&date("01/08/2025")],
        "AD4050 VCP-REC 06:00 - 09:10 | AD4051 REC-VCP 10:30 - 13:40"
    );
    assert_eq!(roster.days[&date("02/08/2025")], "FOLGA");

    // 1:05 + 3:10 + 3:10
    assert_eq!(roster.flight_total.minutes, 445);
    assert_eq!(roster.flight_total.to_string(), "7h 25min");
    assert_eq!(roster.flight_total.fragments, 3);
    assert_eq!(roster.flight_total.strategy, FlightStrategy::FlightCodeBlocks);
}

// ---------------------------------------------------------------------------
// English layout: year comes from the summary header
// ---------------------------------------------------------------------------
#[test]
fn en_roster_extraction() {
    let roster = parse_text(EN_ROSTER);

    assert_eq!(roster.name, "JOHN SMITH");
    assert_eq!(roster.period.reference_month.as_deref(), Some("08"));
    assert_eq!(roster.days[&date("01/08/2025")], "AD4050 VCP - REC 06:00 - 09:10");
    assert_eq!(roster.days[&date("03/08/2025")], "Day Off");
    assert_eq!(roster.days[&date("01/09/2025")], "AD4100 CNF-GRU");
    assert_eq!(roster.flight_total.to_string(), "4h 15min");
}

// ---------------------------------------------------------------------------
// Full comparison, all days
// ---------------------------------------------------------------------------
#[test]
fn compare_br_with_en() {
    let cmp = compare_pdfs(b"br", b"en", &MockExtractor, &CompareOptions::default()).unwrap();

    let dates: Vec<String> = cmp.rows.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(
        dates,
        vec![
            "31/07/2025",
            "01/08/2025",
            "02/08/2025",
            "03/08/2025",
            "05/08/2025",
            "01/09/2025",
        ]
    );

    let first_aug = &cmp.rows[1];
    assert!(first_aug.activity_left.starts_with("AD4050"));
    assert!(first_aug.activity_right.starts_with("AD4050"));

    let third_aug = &cmp.rows[3];
    assert_eq!(third_aug.activity_left, "");
    assert_eq!(third_aug.activity_right, "Day Off");

    assert_eq!(cmp.name1, "ANA SOUZA");
    assert_eq!(cmp.name2, "JOHN SMITH");
    assert_eq!(cmp.month1, "08");
    assert_eq!(cmp.month2, "08");
    assert_eq!(cmp.flight_total1.to_string(), "7h 25min");
    assert_eq!(cmp.flight_total2.to_string(), "4h 15min");
}

// ---------------------------------------------------------------------------
// Month filtering keeps only the reference month
// ---------------------------------------------------------------------------
#[test]
fn compare_filtered_to_reference_month() {
    let options = CompareOptions {
        filter_to_reference_month: true,
    };
    let cmp = compare_pdfs(b"br", b"en", &MockExtractor, &options).unwrap();

    assert_eq!(cmp.rows.len(), 4);
    assert!(cmp.rows.iter().all(|r| r.date.month == 8));
}

// ---------------------------------------------------------------------------
// Same document twice: every row populated on both sides
// ---------------------------------------------------------------------------
#[test]
fn compare_identical_rosters() {
    let cmp = compare_texts(BR_ROSTER, BR_ROSTER, &CompareOptions::default());
    assert_eq!(cmp.rows.len(), 4);
    for row in &cmp.rows {
        assert_eq!(row.activity_left, row.activity_right);
    }
    assert_eq!(cmp.flight_total1, cmp.flight_total2);
}

// ---------------------------------------------------------------------------
// Empty documents degrade to placeholders, never errors
// ---------------------------------------------------------------------------
#[test]
fn compare_empty_documents() {
    let cmp = compare_pdfs(b"empty", b"empty", &MockExtractor, &CompareOptions::default()).unwrap();
    assert!(cmp.rows.is_empty());
    assert_eq!(cmp.name1, "Tripulante");
    assert_eq!(cmp.name2, "Tripulante");
    assert_eq!(cmp.month1, "");
    assert_eq!(cmp.flight_total1.to_string(), "0h 00min");

    let json = serde_json::to_value(&cmp).unwrap();
    assert_eq!(json["flightTotal2"], "0h 00min");
    assert_eq!(json["escalas"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// A decode failure on either side fails the comparison
// ---------------------------------------------------------------------------
#[test]
fn decode_failure_propagates() {
    let err = compare_pdfs(b"br", b"garbage", &MockExtractor, &CompareOptions::default())
        .unwrap_err();
    assert!(err.is_decode_failure());
    assert!(matches!(err, EscalaError::Extraction(_)));
}
