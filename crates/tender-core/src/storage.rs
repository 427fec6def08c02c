use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::TenderError;

/// Directory holding the original uploaded files.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Open (creating if needed) the upload directory at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, TenderError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(UploadDir { root })
    }

    /// Write `bytes` as `<id>_<basename>` and return the resulting path.
    pub fn save(&self, id: &Uuid, filename: &str, bytes: &[u8]) -> Result<PathBuf, TenderError> {
        let path = self.root.join(stored_name(id, filename));
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Read back a previously stored file.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, TenderError> {
        Ok(fs::read(path)?)
    }
}

/// Id-prefixed name using only the final component of `filename`.
pub fn stored_name(id: &Uuid, filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");
    format!("{id}_{base}")
}
