use std::path::PathBuf;

use tender_core::config::TenderConfig;
use tender_core::error::TenderError;
use tender_core::TenderDesk;

use super::parse_id;

pub fn run(config: &TenderConfig, id: &str, dest: Option<PathBuf>) -> Result<(), TenderError> {
    let desk = TenderDesk::open(config)?;
    let id = parse_id(id)?;
    let stored = desk.stored_file(&id)?;

    match dest {
        Some(dir) => {
            let name = stored
                .file_name()
                .ok_or_else(|| TenderError::TenderNotFound(id.to_string()))?;
            std::fs::create_dir_all(&dir)?;
            let target = dir.join(name);
            std::fs::write(&target, desk.read_original(&id)?)?;
            eprintln!("Written to {}", target.display());
        }
        None => println!("{}", stored.display()),
    }

    Ok(())
}
