use std::sync::LazyLock;

use regex::Captures;

use super::patterns::{first_match, FieldPattern};

/// Deposit heuristics, most specific first.
///
/// The indicator pattern is case-insensitive and may span lines; the bare
/// currency fallback is case-sensitive so words like "hours 24" do not match.
static DEPOSIT_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new(
            "deposit_indicator",
            r"(?is)(?:EMD|Earnest Money Deposit).*?(₹|Rs\.?|INR)\s*(\d[\d,]*(?:\.\d+)?)",
            marker_and_amount,
        ),
        FieldPattern::new(
            "currency_amount",
            r"(₹|Rs\.?|INR)\s*(\d[\d,]*(?:\.\d+)?)",
            marker_and_amount,
        ),
    ]
});

fn marker_and_amount(caps: &Captures<'_>) -> String {
    format!("{} {}", &caps[1], &caps[2])
}

/// Find the earnest money deposit as `"<marker> <amount>"`, or an empty string.
pub fn find_deposit(text: &str) -> String {
    match first_match(&DEPOSIT_PATTERNS, text) {
        Some((pattern, value)) => {
            tracing::debug!(pattern, value = %value, "deposit amount matched");
            value
        }
        None => String::new(),
    }
}
