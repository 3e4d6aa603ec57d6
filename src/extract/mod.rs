//! Metadata extraction for document pages
//!
//! Given a fetched document page, this module derives a [`CandidateRecord`]:
//! - Title from an ordered list of selectors, with a URL fallback
//! - Document type and language from URL path vocabularies
//! - Publication date from the first matching date recognizer
//! - A short description from the first paragraph
//!
//! None of the heuristics fail: a miss is an empty field.

mod date;
mod title;
mod vocabulary;

pub use date::extract_date;
pub use title::{collapse_whitespace, extract_title, title_from_url, TITLE_SELECTORS};
pub use vocabulary::{classify_language, classify_type, DocumentType};

use scraper::{Html, Node, Selector};
use url::Url;

/// Paragraphs at or below this many characters are treated as boilerplate
pub const DESCRIPTION_MIN_CHARS: usize = 50;

/// Descriptions longer than this are truncated
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Marker appended to truncated descriptions
pub const ELLIPSIS: &str = "...";

/// Elements whose text is never rendered
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Metadata scraped from one document page, ready to merge into the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub title: String,
    pub url: String,
    pub doc_type: DocumentType,
    pub date: String,
    pub language: String,
    pub description: String,
}

/// Extracts a candidate record from a parsed document page
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `url` - The URL the page was requested from
/// * `default_language` - Language assumed when the URL has no language code
pub fn extract_record(document: &Html, url: &Url, default_language: &str) -> CandidateRecord {
    let text = visible_text(document);

    CandidateRecord {
        title: extract_title(document, url),
        url: url.to_string(),
        doc_type: classify_type(url),
        date: extract_date(&text),
        language: classify_language(url, default_language),
        description: extract_description(document),
    }
}

/// Concatenates every text node outside script-like elements
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Node::Text(chunk) = node.value() else {
            continue;
        };

        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .is_some_and(|name| INVISIBLE_ELEMENTS.contains(&name));

        if !hidden {
            text.push_str(chunk);
        }
    }

    text
}

/// Takes the first paragraph as a description
///
/// Returns an empty string when there is no paragraph or its trimmed text is
/// no longer than [`DESCRIPTION_MIN_CHARS`].
pub fn extract_description(document: &Html) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|p| summarize(p.text().collect::<String>().trim()))
        .unwrap_or_default()
}

/// Applies the description length policy to a paragraph's text
pub fn summarize(text: &str) -> String {
    let length = text.chars().count();

    if length <= DESCRIPTION_MIN_CHARS {
        return String::new();
    }

    if length > DESCRIPTION_MAX_CHARS {
        let mut truncated: String = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}
