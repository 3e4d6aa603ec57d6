//! Field-by-field merge policy
//!
//! - Scalar metadata (`type`, `date`, `language`, `description`): first
//!   writer wins, a non-empty value is never replaced.
//! - Location and language sets: append-only, duplicates suppressed.
//! - A newly seen URL becomes the primary URL.
//! - Reader-owned fields and `added_date` are never touched.

use crate::catalog::Document;
use crate::extract::CandidateRecord;

/// What a merge changed on an existing document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeChanges {
    pub url_added: bool,
    pub language_added: bool,
    pub type_filled: bool,
    pub date_filled: bool,
    pub description_filled: bool,
}

impl MergeChanges {
    /// Returns true if the merge left the document untouched
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sets `field` to `value` only if `field` is empty and `value` is not
pub fn fill_if_empty(field: &mut String, value: &str) -> bool {
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
        true
    } else {
        false
    }
}

/// Appends `value` to `set` unless it is empty or already present
pub fn append_unique(set: &mut Vec<String>, value: &str) -> bool {
    if value.is_empty() || set.iter().any(|v| v == value) {
        false
    } else {
        set.push(value.to_string());
        true
    }
}

/// Builds a new catalog document from a candidate record
pub fn new_document(candidate: &CandidateRecord, added_date: String) -> Document {
    let mut languages = Vec::new();
    append_unique(&mut languages, &candidate.language);

    Document {
        title: candidate.title.clone(),
        url: candidate.url.clone(),
        urls: vec![candidate.url.clone()],
        doc_type: candidate.doc_type.as_str().to_string(),
        date: candidate.date.clone(),
        language: candidate.language.clone(),
        languages,
        description: candidate.description.clone(),
        read: false,
        comments: String::new(),
        quotes: Vec::new(),
        added_date,
        extra: Default::default(),
    }
}

/// Merges a candidate record into an existing document
pub fn merge_candidate(document: &mut Document, candidate: &CandidateRecord) -> MergeChanges {
    let mut changes = MergeChanges::default();

    if !document.urls.contains(&candidate.url) {
        if document.urls.is_empty() && !document.url.is_empty() {
            document.urls.push(document.url.clone());
        }
        document.urls.push(candidate.url.clone());
        document.url = candidate.url.clone();
        changes.url_added = true;
    }

    changes.type_filled = fill_if_empty(&mut document.doc_type, candidate.doc_type.as_str());
    changes.date_filled = fill_if_empty(&mut document.date, &candidate.date);
    fill_if_empty(&mut document.language, &candidate.language);
    changes.language_added = append_unique(&mut document.languages, &candidate.language);
    changes.description_filled = fill_if_empty(&mut document.description, &candidate.description);

    changes
}
