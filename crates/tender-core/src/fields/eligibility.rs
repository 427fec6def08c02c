/// Longest excerpt kept, in characters.
pub const EXCERPT_LIMIT: usize = 200;
pub const TRUNCATION_MARKER: &str = "...";

/// Leading `EXCERPT_LIMIT` characters of `text`, marked when cut short.
pub fn eligibility_excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
