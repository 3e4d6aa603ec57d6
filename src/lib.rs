//! Leo-Catalog: an incremental catalog of Leo XIII's documents on vatican.va
//!
//! This crate discovers document pages from a fixed set of seed index pages,
//! extracts per-page metadata with ordered heuristics, and merges the results
//! into a durable JSON catalog without touching the reader's own annotations
//! (read flag, comments, quotes).

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod links;
pub mod output;

use thiserror::Error;

/// Main error type for Leo-Catalog operations
#[derive(Debug, Error)]
pub enum LeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Store(#[from] catalog::StoreError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Leo-Catalog operations
pub type Result<T> = std::result::Result<T, LeoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{Catalog, Document, DocumentStore, JsonStore};
pub use config::Config;
pub use crawler::{run_pipeline, Pipeline};
pub use extract::{CandidateRecord, DocumentType};
pub use output::RunReport;
