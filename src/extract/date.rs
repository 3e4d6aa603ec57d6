//! Publication date heuristics
//!
//! Dates are recognized, not parsed: the first recognizer that matches
//! anywhere in the page text wins and its literal match is stored as-is.

use regex::Regex;
use std::sync::LazyLock;

/// A named date recognizer
pub struct DatePattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Date recognizers in priority order
static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    [
        // 15 May 1891
        ("day-month-year", r"(\d{1,2})\s+(\w+)\s+(\d{4})"),
        // 1891-05-15
        ("iso", r"(\d{4})-(\d{2})-(\d{2})"),
        // May 15, 1891
        ("month-day-year", r"(\w+)\s+(\d{1,2}),\s+(\d{4})"),
    ]
    .into_iter()
    .map(|(name, pattern)| DatePattern {
        name,
        regex: Regex::new(pattern).unwrap(),
    })
    .collect()
});

/// Finds the first date-like substring in `text`, or an empty string
pub fn extract_date(text: &str) -> String {
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| {
            pattern.regex.find(text).map(|m| {
                tracing::trace!("Date matched by {} pattern: {}", pattern.name, m.as_str());
                m.as_str().to_string()
            })
        })
        .unwrap_or_default()
}
