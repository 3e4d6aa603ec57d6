//! Title heuristics

use scraper::{Html, Selector};
use url::Url;

/// Title selectors, most specific first; the generic `<title>` comes last
pub const TITLE_SELECTORS: &[&str] = &[
    "h1",
    "h2.doc_title",
    ".doc_title",
    ".title",
    ".content h1",
    ".content h2",
    "h2",
    "title",
];

/// Extracts the document title
///
/// Each selector is tried in order against its first matching element; the
/// first non-blank text wins. If every selector comes up empty the title is
/// derived from the URL's last path segment. Internal whitespace is collapsed.
pub fn extract_title(document: &Html, url: &Url) -> String {
    let raw = TITLE_SELECTORS
        .iter()
        .find_map(|selector| first_text(document, selector))
        .unwrap_or_else(|| title_from_url(url));

    collapse_whitespace(&raw)
}

/// Text of the first element matching `selector`, if non-blank
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let text = element.text().collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Builds a title from the last path segment: `rerum-novarum.html` becomes
/// `Rerum Novarum`
pub fn title_from_url(url: &Url) -> String {
    let last = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    let stem = last.strip_suffix(".html").unwrap_or(last);

    title_case(&stem.replace('-', " "))
}

/// Capitalizes the first letter of every run of letters and lowercases the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Collapses runs of whitespace into single spaces and trims the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
