pub mod deposit;
pub mod due_date;
pub mod eligibility;
pub mod patterns;

use crate::model::TenderFields;
use deposit::find_deposit;
use due_date::find_due_date;
use eligibility::eligibility_excerpt;

/// Derive deposit amount, due date and eligibility excerpt from document text.
///
/// Empty text yields all-empty fields. Absent fields are empty strings, not errors.
pub fn extract_fields(text: &str) -> TenderFields {
    if text.is_empty() {
        return TenderFields::default();
    }

    TenderFields {
        deposit_amount: find_deposit(text),
        due_date: find_due_date(text),
        eligibility_excerpt: eligibility_excerpt(text),
    }
}
