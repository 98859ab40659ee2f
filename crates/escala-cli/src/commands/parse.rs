use escala_core::extraction::TextExtractor;
use std::path::PathBuf;
use std::sync::Arc;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    extractor: Arc<dyn TextExtractor>,
) -> Result<(), escala_core::error::EscalaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let parsed = escala_core::parse_pdf(&pdf_bytes, extractor.as_ref())?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} day(s) for {}, written to {}",
                parsed.days.len(),
                parsed.name,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => output::table::print_roster(&parsed),
        },
    }

    Ok(())
}
