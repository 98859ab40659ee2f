use escala_core::extraction::TextExtractor;
use escala_core::CompareOptions;
use std::path::PathBuf;
use std::sync::Arc;

use crate::output;

pub fn run(
    left_file: PathBuf,
    right_file: PathBuf,
    output_format: &str,
    filter_month: bool,
    extractor: Arc<dyn TextExtractor>,
) -> Result<(), escala_core::error::EscalaError> {
    let left = std::fs::read(&left_file)?;
    let right = std::fs::read(&right_file)?;

    let options = CompareOptions {
        filter_to_reference_month: filter_month,
    };
    let comparison = escala_core::compare_pdfs(&left, &right, extractor.as_ref(), &options)?;

    match output_format {
        "json" => output::json::print(&comparison)?,
        _ => output::table::print_comparison(&comparison),
    }

    Ok(())
}
