use tender_core::config::TenderConfig;
use tender_core::error::TenderError;
use tender_core::TenderDesk;

use super::parse_id;
use crate::output;

pub fn run(config: &TenderConfig, id: &str, output_format: &str) -> Result<(), TenderError> {
    let desk = TenderDesk::open(config)?;
    let tender = desk
        .get_tender(&parse_id(id)?)
        .ok_or_else(|| TenderError::TenderNotFound(id.to_string()))?;

    match output_format {
        "json" => output::json::print(tender)?,
        _ => println!("{}", output::table::format_detail(tender)),
    }

    Ok(())
}
