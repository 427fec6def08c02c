pub mod docx;
pub mod pdftotext;
pub mod spreadsheet;

use crate::error::TenderError;
use crate::model::DocumentKind;

/// Raw content pulled out of a document before any field heuristics run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Text(String),
    Table(Vec<Vec<String>>),
}

impl Extracted {
    /// Split into `(text, rows)`, with the side this format does not produce left empty.
    pub fn into_parts(self) -> (String, Vec<Vec<String>>) {
        match self {
            Extracted::Text(text) => (text, Vec::new()),
            Extracted::Table(rows) => (String::new(), rows),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract layout-preserving plain text from PDF bytes.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, TenderError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Run the extractor matching `kind` over `bytes`.
pub fn extract(
    kind: DocumentKind,
    bytes: &[u8],
    pdf: &dyn PdfExtractor,
) -> Result<Extracted, TenderError> {
    match kind {
        DocumentKind::Pdf => pdf.extract_text(bytes).map(Extracted::Text),
        DocumentKind::Docx => docx::extract_text(bytes).map(Extracted::Text),
        DocumentKind::Spreadsheet => spreadsheet::extract_rows(bytes).map(Extracted::Table),
    }
}
