//! URL path vocabularies for document type and language

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Category of a cataloged document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Encyclical,
    Letter,
    Speech,
    #[serde(rename = "Apostolic Letter")]
    ApostolicLetter,
    Unknown,
}

impl DocumentType {
    /// Label stored in the catalog's `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encyclical => "Encyclical",
            Self::Letter => "Letter",
            Self::Speech => "Speech",
            Self::ApostolicLetter => "Apostolic Letter",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path fragments that identify a document type, in priority order
const TYPE_VOCABULARY: &[(&str, DocumentType)] = &[
    ("/encyclicals/", DocumentType::Encyclical),
    ("/letters/", DocumentType::Letter),
    ("/speeches/", DocumentType::Speech),
    ("/apost_letters/", DocumentType::ApostolicLetter),
];

/// Path fragments that identify a language, in priority order
const LANGUAGE_VOCABULARY: &[(&str, &str)] = &[
    ("/en/", "English"),
    ("/it/", "Italian"),
    ("/fr/", "French"),
    ("/de/", "German"),
    ("/es/", "Spanish"),
    ("/la/", "Latin"),
];

/// Infers the document type from the URL path
pub fn classify_type(url: &Url) -> DocumentType {
    let path = url.path();
    TYPE_VOCABULARY
        .iter()
        .find(|(segment, _)| path.contains(segment))
        .map(|(_, doc_type)| *doc_type)
        .unwrap_or(DocumentType::Unknown)
}

/// Infers the language from the URL path, falling back to `default_language`
pub fn classify_language(url: &Url, default_language: &str) -> String {
    let path = url.path();
    LANGUAGE_VOCABULARY
        .iter()
        .find(|(segment, _)| path.contains(segment))
        .map(|(_, language)| (*language).to_string())
        .unwrap_or_else(|| default_language.to_string())
}
