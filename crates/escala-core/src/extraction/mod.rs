pub mod pdftotext;
#[cfg(feature = "pdf-extract")]
pub mod pdf_extract;

use crate::error::EscalaError;

/// Trait for PDF-to-text backends.
///
/// Decoding is treated as a black box: any failure is reported as an
/// error and never retried.
pub trait TextExtractor: Send + Sync {
    /// Extract the plain text of a PDF, pages joined in reading order.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, EscalaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
