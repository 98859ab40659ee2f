use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EscalaError {
    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("missing roster upload '{0}'")]
    MissingUpload(&'static str),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EscalaError {
    /// True for failures of the byte-to-text decode step.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            EscalaError::Extraction(_)
                | EscalaError::PdftotextNotFound
                | EscalaError::PdftotextFailed { .. }
        )
    }
}
