use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Document formats the extraction pipeline knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    /// `xlsx` and `xls` share the tabular path.
    Spreadsheet,
}

impl DocumentKind {
    /// Dispatch on the declared extension of `filename`, compared lower-cased.
    ///
    /// The extension is whatever follows the last `.` of the final path
    /// component, so a bare dotfile like `.pdf` counts. A name with no `.`
    /// has none.
    pub fn from_filename(filename: &str) -> Option<DocumentKind> {
        let name = Path::new(filename).file_name()?.to_str()?;
        let (_, ext) = name.rsplit_once('.')?;
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "xlsx" | "xls" => Some(DocumentKind::Spreadsheet),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
            DocumentKind::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// Heuristically extracted fields. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderFields {
    pub deposit_amount: String,
    pub due_date: String,
    pub eligibility_excerpt: String,
}

/// Everything the pipeline derives from one document's bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub full_text: String,
    pub table_rows: Vec<Vec<String>>,
    pub summary: String,
    pub fields: TenderFields,
}

/// One processed tender document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tender {
    pub id: Uuid,
    pub filename: String,
    pub stored_path: PathBuf,
    pub full_text: String,
    #[serde(default)]
    pub table_rows: Vec<Vec<String>>,
    pub summary: String,
    pub deposit_amount: String,
    pub due_date: String,
    pub eligibility_excerpt: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Tender {
    pub fn from_analysis(
        id: Uuid,
        filename: String,
        stored_path: PathBuf,
        analysis: Analysis,
        uploaded_at: DateTime<Utc>,
    ) -> Tender {
        let Analysis {
            full_text,
            table_rows,
            summary,
            fields,
        } = analysis;
        Tender {
            id,
            filename,
            stored_path,
            full_text,
            table_rows,
            summary,
            deposit_amount: fields.deposit_amount,
            due_date: fields.due_date,
            eligibility_excerpt: fields.eligibility_excerpt,
            uploaded_at,
        }
    }
}
