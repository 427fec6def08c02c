use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TenderError;

/// Where tender data lives and which tools the pipeline calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenderConfig {
    /// Root for the upload directory and the tender snapshot.
    pub data_dir: PathBuf,
    /// pdftotext binary, looked up on `PATH` unless absolute.
    pub pdftotext_program: String,
}

impl Default for TenderConfig {
    fn default() -> Self {
        TenderConfig {
            data_dir: PathBuf::from("data"),
            pdftotext_program: "pdftotext".into(),
        }
    }
}

impl TenderConfig {
    /// Load configuration from a TOML file. Unset keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, TenderError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TenderError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
    }

    pub fn parse(toml_str: &str) -> Result<Self, TenderError> {
        let config: TenderConfig =
            toml::from_str(toml_str).map_err(|e| TenderError::Config(e.to_string()))?;
        if config.pdftotext_program.trim().is_empty() {
            return Err(TenderError::Config(
                "pdftotext_program must not be empty".into(),
            ));
        }
        Ok(config)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("tenders.json")
    }
}
