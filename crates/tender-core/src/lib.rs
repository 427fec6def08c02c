pub mod builder;
pub mod config;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod model;
pub mod storage;
pub mod store;
pub mod summary;

use std::path::Path;

use uuid::Uuid;

use config::TenderConfig;
use error::TenderError;
use extraction::pdftotext::PdftotextExtractor;
use extraction::PdfExtractor;
use model::{Analysis, Tender};
use storage::UploadDir;
use store::TenderStore;

/// Main API entry point: upload directory, record store and PDF backend
/// bundled behind the operations a front end needs.
pub struct TenderDesk {
    uploads: UploadDir,
    store: TenderStore,
    pdf: Box<dyn PdfExtractor>,
}

impl TenderDesk {
    /// Open the upload directory and load the snapshot named by `config`.
    pub fn open(config: &TenderConfig) -> Result<Self, TenderError> {
        let pdf = PdftotextExtractor::with_program(config.pdftotext_program.clone());
        Self::with_extractor(config, Box::new(pdf))
    }

    /// Like `open`, with a caller-supplied PDF backend.
    pub fn with_extractor(
        config: &TenderConfig,
        pdf: Box<dyn PdfExtractor>,
    ) -> Result<Self, TenderError> {
        let uploads = UploadDir::open(config.uploads_dir())?;
        let store = TenderStore::load(config.snapshot_path())?;
        Ok(TenderDesk {
            uploads,
            store,
            pdf,
        })
    }

    /// Build a tender from one uploaded file and store it.
    ///
    /// Extraction problems leave fields empty; only writing the file or the
    /// snapshot fails the upload.
    pub fn process_upload(&mut self, filename: &str, bytes: &[u8]) -> Result<Tender, TenderError> {
        let tender = builder::build_tender(filename, bytes, &self.uploads, self.pdf.as_ref())?;
        self.store.put(tender.clone())?;
        Ok(tender)
    }

    /// Run the pipeline without storing anything.
    pub fn analyze(&self, filename: &str, bytes: &[u8]) -> Analysis {
        builder::analyze(filename, bytes, self.pdf.as_ref())
    }

    /// All tenders, newest first.
    pub fn list_tenders(&self) -> Vec<&Tender> {
        self.store.list()
    }

    pub fn get_tender(&self, id: &Uuid) -> Option<&Tender> {
        self.store.get(id)
    }

    /// Path of the stored original for download.
    pub fn stored_file(&self, id: &Uuid) -> Result<&Path, TenderError> {
        self.get_tender(id)
            .map(|t| t.stored_path.as_path())
            .ok_or_else(|| TenderError::TenderNotFound(id.to_string()))
    }

    /// Bytes of the stored original.
    pub fn read_original(&self, id: &Uuid) -> Result<Vec<u8>, TenderError> {
        let path = self.stored_file(id)?;
        self.uploads.read(path)
    }
}
