//! Configuration module for Leo-Catalog
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, [`Config::default`] describes the
//! Leo XIII section of vatican.va.
//!
//! # Example
//!
//! ```no_run
//! use leo_catalog::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("leo-catalog.toml")).unwrap();
//! println!("Seeds: {}", config.site.seeds.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_seeds, Config, OutputConfig, ScraperConfig, SiteConfig, UserAgentConfig,
    DEFAULT_BASE_URL, DEFAULT_CATALOG_PATH,
};

// Re-export parser functions
pub use parser::{config_hash, load_config, load_config_with_hash};
pub use validation::validate;
