use chrono::Utc;
use uuid::Uuid;

use crate::error::TenderError;
use crate::extraction::spreadsheet::flatten_rows;
use crate::extraction::{self, PdfExtractor};
use crate::fields::extract_fields;
use crate::model::{Analysis, DocumentKind, Tender};
use crate::storage::UploadDir;
use crate::summary::summarize;

/// Rows flattened into text when a spreadsheet yields no text of its own.
pub const FALLBACK_ROWS: usize = 5;

/// Run the extraction pipeline over one document without storing anything.
///
/// Extraction failures are logged and degrade to empty content; this never fails.
pub fn analyze(filename: &str, bytes: &[u8], pdf: &dyn PdfExtractor) -> Analysis {
    let Some(kind) = DocumentKind::from_filename(filename) else {
        tracing::debug!(filename, "unrecognized extension, skipping extraction");
        return Analysis::default();
    };

    tracing::debug!(filename, kind = %kind, pdf_backend = pdf.backend_name(), "extracting");
    let (text, rows) = match extraction::extract(kind, bytes, pdf) {
        Ok(extracted) => extracted.into_parts(),
        Err(e) => {
            tracing::warn!(filename, kind = %kind, error = %e, "extraction failed");
            (String::new(), Vec::new())
        }
    };

    analyze_content(text, rows)
}

/// Derive summary and fields from extracted text and rows.
///
/// When `text` is empty and `rows` are not, the first `FALLBACK_ROWS` rows are
/// flattened into text. That synthesized text feeds the summarizer and field
/// extractor and is also what gets stored as `full_text`.
pub fn analyze_content(text: String, table_rows: Vec<Vec<String>>) -> Analysis {
    let full_text = if text.is_empty() && !table_rows.is_empty() {
        flatten_rows(&table_rows, FALLBACK_ROWS)
    } else {
        text
    };

    if full_text.is_empty() {
        return Analysis {
            table_rows,
            ..Analysis::default()
        };
    }

    Analysis {
        summary: summarize(&full_text),
        fields: extract_fields(&full_text),
        full_text,
        table_rows,
    }
}

/// Turn one uploaded file into a `Tender`: assign an id, persist the original
/// under `uploads`, then extract. Only the file write can fail.
pub fn build_tender(
    filename: &str,
    bytes: &[u8],
    uploads: &UploadDir,
    pdf: &dyn PdfExtractor,
) -> Result<Tender, TenderError> {
    let id = Uuid::new_v4();
    let stored_path = uploads.save(&id, filename, bytes)?;
    let analysis = analyze(filename, bytes, pdf);

    Ok(Tender::from_analysis(
        id,
        filename.to_string(),
        stored_path,
        analysis,
        Utc::now(),
    ))
}
