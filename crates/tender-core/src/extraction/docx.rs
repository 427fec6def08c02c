use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TenderError;
use crate::extraction::pdftotext::decode_ignoring_invalid;

/// Main body part of a WordprocessingML package.
const DOCUMENT_ENTRY: &str = "word/document.xml";

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Pull the body text out of DOCX bytes by stripping every tag from
/// `word/document.xml`. Entities are left as written.
pub fn extract_text(bytes: &[u8]) -> Result<String, TenderError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| TenderError::Archive(format!("not a zip archive: {e}")))?;

    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| TenderError::Archive(format!("{DOCUMENT_ENTRY}: {e}")))?;

    let mut raw = Vec::new();
    entry.read_to_end(&mut raw)?;

    let xml = decode_ignoring_invalid(&raw);
    Ok(strip_markup(&xml))
}

/// Remove every `<...>` substring.
pub fn strip_markup(xml: &str) -> String {
    MARKUP_TAG.replace_all(xml, "").into_owned()
}
