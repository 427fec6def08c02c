use std::sync::LazyLock;

use regex::Regex;

/// Number of lead sentences kept in a summary.
pub const SUMMARY_SENTENCES: usize = 3;

/// Whitespace following a run of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Split trimmed text into sentences, keeping each terminator with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        let end = m.as_str().trim_end().len() + m.start();
        sentences.push(&text[start..end]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences
}

/// Extractive summary: the first `SUMMARY_SENTENCES` sentences joined by a space.
pub fn summarize(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ")
}
