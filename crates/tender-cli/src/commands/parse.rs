use std::path::PathBuf;

use tender_core::config::TenderConfig;
use tender_core::error::TenderError;
use tender_core::extraction::pdftotext::PdftotextExtractor;

use crate::output;

pub fn run(
    config: &TenderConfig,
    input_file: PathBuf,
    output_format: &str,
) -> Result<(), TenderError> {
    let bytes = std::fs::read(&input_file)?;
    let filename = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extractor = PdftotextExtractor::with_program(config.pdftotext_program.clone());
    let analysis = tender_core::builder::analyze(&filename, &bytes, &extractor);

    match output_format {
        "json" => output::json::print(&analysis)?,
        _ => println!("{}", output::table::format_analysis(&filename, &analysis)),
    }

    Ok(())
}
