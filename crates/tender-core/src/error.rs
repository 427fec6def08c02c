use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TenderError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to read DOCX archive: {0}")]
    Archive(String),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("tender snapshot at {path} is unreadable: {reason}")]
    SnapshotCorrupt { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("Tender not found: {0}")]
    TenderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
