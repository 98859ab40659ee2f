pub mod compare;
pub mod parse;
pub mod serve;

use escala_core::extraction::pdftotext::PdftotextExtractor;
use escala_core::extraction::TextExtractor;
use std::sync::Arc;

use crate::Backend;

pub fn extractor(backend: Backend, layout: bool) -> Arc<dyn TextExtractor> {
    match backend {
        Backend::Pdftotext => Arc::new(PdftotextExtractor::new().with_layout(layout)),
        #[cfg(feature = "pdf-extract")]
        Backend::PdfExtract => {
            Arc::new(escala_core::extraction::pdf_extract::PdfExtractExtractor::new())
        }
    }
}
