use tender_core::config::TenderConfig;
use tender_core::error::TenderError;
use tender_core::TenderDesk;

use crate::output;

pub fn run(config: &TenderConfig, output_format: &str) -> Result<(), TenderError> {
    let desk = TenderDesk::open(config)?;
    let tenders = desk.list_tenders();

    match output_format {
        "json" => output::json::print(&tenders)?,
        _ => println!("{}", output::table::format_list(&tenders)),
    }

    Ok(())
}
