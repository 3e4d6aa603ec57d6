//! Store trait and error types
//!
//! This module defines the trait interface for catalog backends. Identity
//! resolution and merging are provided methods, so every backend applies the
//! same policy; a backend only supplies document access and persistence.

use crate::catalog::merge::{merge_candidate, new_document, MergeChanges};
use crate::catalog::{timestamp_now, Document};
use crate::extract::CandidateRecord;
use thiserror::Error;

/// Errors that can occur while persisting the catalog
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Whether an upsert created a document or merged into an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated(MergeChanges),
}

/// Result of [`DocumentStore::upsert`]
#[derive(Debug)]
pub struct Upsert<'a> {
    pub outcome: UpsertOutcome,
    pub document: &'a Document,
}

/// Trait for catalog backends
pub trait DocumentStore {
    /// All documents in insertion order
    fn documents(&self) -> &[Document];

    /// Mutable access to the document list
    fn documents_mut(&mut self) -> &mut Vec<Document>;

    /// Writes the full catalog to durable storage, replacing the previous
    /// snapshot
    fn persist(&mut self) -> StoreResult<()>;

    /// Number of documents in the catalog
    fn len(&self) -> usize {
        self.documents().len()
    }

    /// Returns true if the catalog holds no documents
    fn is_empty(&self) -> bool {
        self.documents().is_empty()
    }

    /// Finds the document matching `title` or known at `url`
    ///
    /// Linear scan; the first match in insertion order wins. The URL is
    /// compared against every known location, not only the primary one.
    fn resolve(&self, title: &str, url: &str) -> Option<&Document> {
        self.documents().iter().find(|d| d.matches(title, url))
    }

    /// Creates a document from `candidate` or merges it into its match
    fn upsert(&mut self, candidate: &CandidateRecord) -> Upsert<'_> {
        let documents = self.documents_mut();

        match documents
            .iter()
            .position(|d| d.matches(&candidate.title, &candidate.url))
        {
            Some(index) => {
                let document = &mut documents[index];
                let changes = merge_candidate(document, candidate);
                if changes.url_added {
                    tracing::info!("Updated URLs for: {}", document.title);
                } else if !changes.is_empty() {
                    tracing::debug!("Filled metadata for: {}", document.title);
                }
                Upsert {
                    outcome: UpsertOutcome::Updated(changes),
                    document: &documents[index],
                }
            }
            None => {
                let index = documents.len();
                documents.push(new_document(candidate, timestamp_now()));
                tracing::info!("Added new document: {}", candidate.title);
                Upsert {
                    outcome: UpsertOutcome::Created,
                    document: &documents[index],
                }
            }
        }
    }
}
