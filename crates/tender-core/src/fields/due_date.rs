use std::sync::LazyLock;

use regex::Captures;

use super::patterns::{first_match, FieldPattern};

/// Deadline heuristics, most specific first. Dates are returned verbatim,
/// never normalized or checked against the calendar.
static DUE_DATE_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    vec![
        FieldPattern::new(
            "deadline_indicator",
            r"(?i)(?:submission(?: date)?|due date|closing date)\D*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
            |caps: &Captures<'_>| caps[1].to_string(),
        ),
        FieldPattern::new(
            "date_token",
            r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}",
            |caps: &Captures<'_>| caps[0].to_string(),
        ),
    ]
});

/// Find the submission deadline as the raw matched date token, or an empty string.
pub fn find_due_date(text: &str) -> String {
    match first_match(&DUE_DATE_PATTERNS, text) {
        Some((pattern, value)) => {
            tracing::debug!(pattern, value = %value, "due date matched");
            value
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_then_date() {
        assert_eq!(
            find_due_date("EMD: Rs. 50,000. Submission date: 12/05/2024. Eligible bidders"),
            "12/05/2024"
        );
        assert_eq!(find_due_date("CLOSING DATE - 3-7-25 at noon"), "3-7-25");
    }

    #[test]
    fn test_indicator_wins_over_earlier_date() {
        assert_eq!(
            find_due_date("Issued 01/01/2024.\nDue date:\n15/02/2024"),
            "15/02/2024"
        );
    }

    #[test]
    fn test_mixed_separators_are_kept_verbatim() {
        assert_eq!(find_due_date("submission 31-13/2024"), "31-13/2024");
    }

    #[test]
    fn test_falls_back_to_first_date_token() {
        assert_eq!(find_due_date("Published on 5/6/2023, revised 7/8/2023"), "5/6/2023");
    }

    #[test]
    fn test_no_date_anywhere() {
        assert_eq!(find_due_date("Submission by the end of the month"), "");
        assert_eq!(find_due_date(""), "");
    }
}
