pub mod error;
pub mod extraction;
pub mod merge;
pub mod model;
pub mod parsing;

use error::EscalaError;
use extraction::TextExtractor;
use model::{Comparison, ParsedRoster};

/// Options for combining two rosters.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Keep only days in the reference month (left roster's, else right's).
    pub filter_to_reference_month: bool,
}

/// Parse the extracted text of one roster.
pub fn parse_text(text: &str) -> ParsedRoster {
    parsing::parse_roster(text)
}

/// Extract and parse one roster PDF.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn TextExtractor,
) -> Result<ParsedRoster, EscalaError> {
    let text = extractor.extract_text(pdf_bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        chars = text.len(),
        "PDF text extracted"
    );
    Ok(parse_text(&text))
}

/// Main API entry point: compare two roster PDFs.
///
/// Both documents are extracted and parsed on their own threads; the merge
/// waits for both. A decode failure on either side fails the whole call.
pub fn compare_pdfs(
    left_pdf: &[u8],
    right_pdf: &[u8],
    extractor: &dyn TextExtractor,
    options: &CompareOptions,
) -> Result<Comparison, EscalaError> {
    let (left, right) = std::thread::scope(|s| {
        let left = s.spawn(|| parse_pdf(left_pdf, extractor));
        let right = parse_pdf(right_pdf, extractor);
        (join(left), right)
    });
    Ok(compare_parsed(&left?, &right?, options))
}

/// Compare two rosters given their extracted text.
pub fn compare_texts(left_text: &str, right_text: &str, options: &CompareOptions) -> Comparison {
    let (left, right) = std::thread::scope(|s| {
        let left = s.spawn(|| parse_text(left_text));
        let right = parse_text(right_text);
        (join(left), right)
    });
    compare_parsed(&left, &right, options)
}

/// Combine two already parsed rosters into the comparison response.
pub fn compare_parsed(
    left: &ParsedRoster,
    right: &ParsedRoster,
    options: &CompareOptions,
) -> Comparison {
    let reference_month = if options.filter_to_reference_month {
        left.period
            .reference_month
            .as_deref()
            .or(right.period.reference_month.as_deref())
    } else {
        None
    };

    let rows = merge::merge_days(&left.days, &right.days, reference_month);

    tracing::debug!(
        left_days = left.days.len(),
        right_days = right.days.len(),
        rows = rows.len(),
        reference_month = ?reference_month,
        "rosters merged"
    );

    Comparison {
        rows,
        name1: left.name.clone(),
        name2: right.name.clone(),
        month1: left.period.reference_month.clone().unwrap_or_default(),
        month2: right.period.reference_month.clone().unwrap_or_default(),
        flight_total1: left.flight_total,
        flight_total2: right.flight_total,
    }
}

fn join<T>(handle: std::thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}
