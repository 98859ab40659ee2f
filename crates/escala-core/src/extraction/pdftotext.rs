use crate::error::EscalaError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::process::{Command, Output};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode by default. `with_layout` switches to
/// `pdftotext -layout`, which keeps column alignment but indents lines.
#[derive(Debug, Default)]
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, EscalaError> {
        // pdftotext needs a real file to read from
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| EscalaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| EscalaError::Extraction(e.to_string()))?;

        let mut cmd = Command::new("pdftotext");
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.arg("-enc").arg("UTF-8");
        cmd.arg(tmpfile.path()).arg("-"); // output to stdout

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EscalaError::PdftotextNotFound
            } else {
                EscalaError::Extraction(format!("pdftotext failed: {}", e))
            }
        })?;

        decode_output(output)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn decode_output(output: Output) -> Result<String, EscalaError> {
    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(EscalaError::PdftotextFailed { code, stderr });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    Ok(join_pages(&text))
}

/// pdftotext separates pages with a form feed. Page breaks become line
/// breaks so a day block that spans two pages stays in one piece.
fn join_pages(text: &str) -> String {
    text.split('\x0c')
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
