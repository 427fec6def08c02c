pub mod download;
pub mod ingest;
pub mod list;
pub mod parse;
pub mod show;

use tender_core::error::TenderError;
use uuid::Uuid;

/// Parse a tender id; malformed ids are simply not found.
pub fn parse_id(id: &str) -> Result<Uuid, TenderError> {
    Uuid::parse_str(id.trim()).map_err(|_| TenderError::TenderNotFound(id.to_string()))
}
