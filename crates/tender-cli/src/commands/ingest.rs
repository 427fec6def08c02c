use std::path::PathBuf;

use tender_core::config::TenderConfig;
use tender_core::error::TenderError;
use tender_core::TenderDesk;

pub fn run(config: &TenderConfig, files: Vec<PathBuf>) -> Result<(), TenderError> {
    let mut desk = TenderDesk::open(config)?;

    // Sequential, in the order given
    for path in &files {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let tender = desk.process_upload(&filename, &bytes)?;
        eprintln!("  {}  {}", tender.id, tender.filename);
    }

    println!("Uploaded {} file(s) successfully!", files.len());
    Ok(())
}
