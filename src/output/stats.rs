//! Statistics over an existing catalog
//!
//! This module backs the `--stats` flag: it summarizes the documents already
//! in a catalog without touching the network.

use crate::catalog::Catalog;
use std::collections::BTreeMap;

/// Catalog statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStatistics {
    /// Total number of documents
    pub total_documents: usize,

    /// Documents the reader has marked as read
    pub read_documents: usize,

    /// Documents with a non-empty comment or at least one quote
    pub annotated_documents: usize,

    /// Count of documents by type (empty types grouped as "Unknown")
    pub documents_by_type: BTreeMap<String, usize>,

    /// Count of documents available in each language
    pub documents_by_language: BTreeMap<String, usize>,

    /// Documents reachable at more than one URL
    pub multi_url_documents: usize,

    /// When the catalog was last persisted
    pub last_updated: Option<String>,
}

/// Computes statistics for a catalog
pub fn load_statistics(catalog: &Catalog) -> CatalogStatistics {
    let mut stats = CatalogStatistics {
        total_documents: catalog.documents.len(),
        last_updated: catalog.metadata.last_updated.clone(),
        ..CatalogStatistics::default()
    };

    for doc in &catalog.documents {
        if doc.read {
            stats.read_documents += 1;
        }
        if !doc.comments.is_empty() || !doc.quotes.is_empty() {
            stats.annotated_documents += 1;
        }
        if doc.urls.len() > 1 {
            stats.multi_url_documents += 1;
        }

        let doc_type = if doc.doc_type.is_empty() {
            "Unknown"
        } else {
            doc.doc_type.as_str()
        };
        *stats
            .documents_by_type
            .entry(doc_type.to_string())
            .or_insert(0) += 1;

        for language in &doc.languages {
            *stats
                .documents_by_language
                .entry(language.clone())
                .or_insert(0) += 1;
        }
    }

    stats
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CatalogStatistics) {
    println!("=== Catalog Statistics ===\n");

    println!("Overview:");
    println!("  Total documents: {}", stats.total_documents);
    println!(
        "  Last updated: {}",
        stats.last_updated.as_deref().unwrap_or("never")
    );
    println!("  Available at several URLs: {}", stats.multi_url_documents);
    println!();

    println!("Documents by Type:");
    // Sort types by count (descending)
    let mut type_counts: Vec<_> = stats.documents_by_type.iter().collect();
    type_counts.sort_by(|a, b| b.1.cmp(a.1));
    for (doc_type, count) in type_counts {
        println!("  {}: {}", doc_type, count);
    }
    println!();

    if !stats.documents_by_language.is_empty() {
        println!("Documents by Language:");
        for (language, count) in &stats.documents_by_language {
            println!("  {}: {}", language, count);
        }
        println!();
    }

    let read_rate = if stats.total_documents > 0 {
        (stats.read_documents as f64 / stats.total_documents as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Reading Progress: {:.1}% ({} / {} documents read, {} annotated)",
        read_rate, stats.read_documents, stats.total_documents, stats.annotated_documents
    );
}
