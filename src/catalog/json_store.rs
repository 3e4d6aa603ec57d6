//! JSON file implementation of the catalog store

use crate::catalog::traits::{DocumentStore, StoreResult};
use crate::catalog::{timestamp_now, Catalog, Document};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Catalog kept in memory and snapshotted to a pretty-printed JSON file
pub struct JsonStore {
    path: PathBuf,
    catalog: Catalog,
}

impl JsonStore {
    /// Opens the catalog at `path`
    ///
    /// A missing or unreadable file, or text that is not JSON, yields an
    /// empty catalog; the problem is logged and never returned to the caller.
    /// Records with misshapen fields are kept and coerced.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the JSON catalog
    /// * `author` - Author recorded when the catalog has none
    /// * `source_label` - Source label recorded when the catalog has none
    pub fn open(path: impl Into<PathBuf>, author: &str, source_label: &str) -> Self {
        let path = path.into();
        let mut catalog = load(&path).unwrap_or_else(|| Catalog::new(author, source_label));
        if catalog.metadata.author.is_empty() {
            catalog.metadata.author = author.to_string();
        }
        if catalog.metadata.source_label.is_empty() {
            catalog.metadata.source_label = source_label.to_string();
        }
        Self { path, catalog }
    }

    /// Location of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Temp file written before the atomic rename, next to the catalog
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonStore {
    fn documents(&self) -> &[Document] {
        &self.catalog.documents
    }

    fn documents_mut(&mut self) -> &mut Vec<Document> {
        &mut self.catalog.documents
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.catalog.metadata.last_updated = Some(timestamp_now());
        self.catalog.metadata.total_documents = self.catalog.documents.len();

        let json = serde_json::to_string_pretty(&self.catalog)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write to a temp file first so readers never see a partial catalog
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;

        if let Err(e) = replace_file(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e.into());
        }

        info!(
            "Saved {} documents to {}",
            self.catalog.documents.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Moves `from` over `to`
fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    if to.exists() {
        fs::remove_file(to)?;
    }
    fs::rename(from, to)
}

/// Reads a catalog snapshot, or None if there is nothing usable at `path`
pub fn load(path: &Path) -> Option<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No catalog at {}, starting empty", path.display());
            return None;
        }
        Err(e) => {
            warn!("Error reading catalog {}: {}", path.display(), e);
            warn!("Starting with an empty catalog");
            return None;
        }
    };

    match serde_json::from_str::<Catalog>(&content) {
        Ok(mut catalog) => {
            for document in &mut catalog.documents {
                document.ensure_primary_listed();
            }
            info!("Loaded {} existing documents", catalog.documents.len());
            Some(catalog)
        }
        Err(e) => {
            warn!("Catalog {} is not valid JSON: {}", path.display(), e);
            warn!("Starting with an empty catalog");
            None
        }
    }
}
