use crate::error::EscalaError;
use crate::extraction::TextExtractor;

/// In-process extraction backend using the `pdf-extract` crate.
#[derive(Debug, Default)]
pub struct PdfExtractExtractor;

impl PdfExtractExtractor {
    pub fn new() -> Self {
        PdfExtractExtractor
    }
}

impl TextExtractor for PdfExtractExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, EscalaError> {
        pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| EscalaError::Extraction(e.to_string()))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
