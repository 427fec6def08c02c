use regex::{Captures, Regex};

/// One heuristic in an ordered fallback chain.
pub struct FieldPattern {
    /// Short label used in logs and tests.
    pub name: &'static str,
    pub regex: Regex,
    /// Turns a match into the field value.
    pub render: fn(&Captures<'_>) -> String,
}

impl FieldPattern {
    pub fn new(name: &'static str, pattern: &str, render: fn(&Captures<'_>) -> String) -> Self {
        FieldPattern {
            name,
            // Patterns are compile-time literals
            regex: Regex::new(pattern).unwrap(),
            render,
        }
    }

    pub fn apply(&self, text: &str) -> Option<String> {
        self.regex.captures(text).map(|caps| (self.render)(&caps))
    }
}

/// Evaluate `patterns` in order and return the first hit as `(pattern name, value)`.
pub fn first_match<'p>(patterns: &'p [FieldPattern], text: &str) -> Option<(&'p str, String)> {
    patterns
        .iter()
        .find_map(|p| p.apply(text).map(|value| (p.name, value)))
}
