use crate::error::TenderError;
use crate::extraction::PdfExtractor;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` to keep column alignment of tables and forms.
pub struct PdftotextExtractor {
    program: String,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_program("pdftotext")
    }

    /// Use a specific pdftotext binary instead of the one on `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        PdftotextExtractor {
            program: program.into(),
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, TenderError> {
        // pdftotext only reads from a path
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| TenderError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| TenderError::Extraction(e.to_string()))?;

        let output = Command::new(&self.program)
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TenderError::PdftotextNotFound
                } else {
                    TenderError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(TenderError::PdftotextFailed { code, stderr });
        }

        Ok(decode_ignoring_invalid(&output.stdout))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Decode UTF-8, dropping undecodable bytes rather than substituting them.
pub(crate) fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
