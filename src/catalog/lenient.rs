//! Tolerant reading of hand-edited catalog records
//!
//! The catalog file is edited by people. A `null` or a value of the wrong
//! JSON type in one field must not cost the rest of the file, so records are
//! read key by key from JSON values instead of through strict typed fields.
//! Misshapen values are coerced to the field's type; nothing is dropped.

use crate::catalog::{Catalog, CatalogMetadata, Document};
use serde_json::{Map, Value};
use tracing::warn;

impl From<Value> for Catalog {
    fn from(value: Value) -> Self {
        let mut catalog = Catalog {
            metadata: CatalogMetadata::default(),
            documents: Vec::new(),
        };

        let Value::Object(mut root) = value else {
            warn!("Catalog root is not an object, ignoring its content");
            return catalog;
        };

        if let Some(Value::Object(metadata)) = root.remove("metadata") {
            catalog.metadata = CatalogMetadata::from(metadata);
        }

        match root.remove("documents") {
            Some(Value::Array(entries)) => {
                for (index, entry) in entries.into_iter().enumerate() {
                    match entry {
                        Value::Object(record) => catalog.documents.push(Document::from(record)),
                        other => warn!("Skipping catalog entry {}: not a record ({})", index, other),
                    }
                }
            }
            None | Some(Value::Null) => {}
            Some(other) => warn!("Catalog documents are not a list, ignoring: {}", other),
        }

        catalog
    }
}

impl From<Map<String, Value>> for CatalogMetadata {
    fn from(mut map: Map<String, Value>) -> Self {
        let last_updated = take_string(&mut map, "last_updated");
        Self {
            last_updated: (!last_updated.is_empty()).then_some(last_updated),
            author: take_string(&mut map, "pope"),
            source_label: take_string(&mut map, "source"),
            total_documents: map
                .remove("total_documents")
                .and_then(|v| v.as_u64())
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            title: take_string(&mut map, "title"),
            url: take_string(&mut map, "url"),
            urls: take_string_list(&mut map, "urls"),
            doc_type: take_string(&mut map, "type"),
            date: take_string(&mut map, "date"),
            language: take_string(&mut map, "language"),
            languages: take_string_list(&mut map, "languages"),
            description: take_string(&mut map, "description"),
            read: take_bool(&mut map, "read"),
            comments: take_string(&mut map, "comments"),
            quotes: take_values(&mut map, "quotes"),
            added_date: take_string(&mut map, "added_date"),
            extra: map,
        }
    }
}

/// Scalars other than strings keep their JSON text; null reads as empty
fn take_string(map: &mut Map<String, Value>, key: &str) -> String {
    match map.remove(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// Reads a flag the way a reader would write it: `true`, `"yes"`, `1`
fn take_bool(map: &mut Map<String, Value>, key: &str) -> bool {
    match map.remove(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim().to_lowercase();
            !matches!(s.as_str(), "" | "false" | "no" | "n" | "0")
        }
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
    }
}

/// A lone string is a one-element list; nulls inside the list are dropped
fn take_string_list(map: &mut Map<String, Value>, key: &str) -> Vec<String> {
    match map.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::String(s)) => vec![s],
        Some(other) => vec![other.to_string()],
    }
}

/// Keeps every quote as written; a single quote outside a list is wrapped
fn take_values(map: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match map.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(other) => vec![other],
    }
}
