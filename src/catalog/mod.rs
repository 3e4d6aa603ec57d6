//! Catalog module for persisting discovered documents
//!
//! This module owns the document catalog, including:
//! - The durable JSON catalog format
//! - Identity resolution (title or URL)
//! - The field-by-field merge policy
//! - Atomic snapshot persistence and tolerant loading

mod json_store;
mod lenient;
mod merge;
mod traits;

pub use json_store::JsonStore;
pub use merge::{append_unique, fill_if_empty, merge_candidate, new_document, MergeChanges};
pub use traits::{DocumentStore, StoreError, StoreResult, Upsert, UpsertOutcome};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The whole durable catalog: metadata plus documents in insertion order
///
/// Deserializing never fails on valid JSON: misshapen fields are coerced and
/// entries that are not records are skipped with a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Catalog {
    pub metadata: CatalogMetadata,
    pub documents: Vec<Document>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new(author: &str, source_label: &str) -> Self {
        Self {
            metadata: CatalogMetadata {
                last_updated: None,
                author: author.to_string(),
                source_label: source_label.to_string(),
                total_documents: 0,
            },
            documents: Vec::new(),
        }
    }
}

/// Catalog-level metadata, recomputed on every persist
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CatalogMetadata {
    pub last_updated: Option<String>,
    #[serde(rename = "pope")]
    pub author: String,
    #[serde(rename = "source")]
    pub source_label: String,
    pub total_documents: usize,
}

/// One cataloged publication, possibly reachable at several URLs
///
/// `read`, `comments` and `quotes` belong to the reader: they are set once
/// when the document is created and never touched by a scrape. Keys the
/// reader added by hand are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Document {
    pub title: String,
    /// Most recently discovered location
    pub url: String,
    /// Every known location, in discovery order
    pub urls: Vec<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub date: String,
    /// Language of the first variant seen
    pub language: String,
    pub languages: Vec<String>,
    pub description: String,
    pub read: bool,
    pub comments: String,
    pub quotes: Vec<Value>,
    pub added_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Identity test: same non-empty title, or `url` is one of this
    /// document's known locations
    pub fn matches(&self, title: &str, url: &str) -> bool {
        (!title.is_empty() && self.title == title) || self.is_known_at(url)
    }

    /// Returns true if `url` is the primary or an alternate location
    pub fn is_known_at(&self, url: &str) -> bool {
        self.url == url || self.urls.iter().any(|u| u == url)
    }

    /// Restores the primary-URL-is-listed invariant on records written by
    /// older versions, which only created `urls` on the first merge
    fn ensure_primary_listed(&mut self) {
        if !self.url.is_empty() && !self.urls.contains(&self.url) {
            self.urls.insert(0, self.url.clone());
        }
    }
}

/// Current time as an RFC 3339 UTC timestamp
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
