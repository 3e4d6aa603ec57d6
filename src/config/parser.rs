use crate::config::types::{default_seeds, Config};
use crate::config::validation::validate;
use crate::ConfigResult;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Missing sections and fields fall back to their defaults, so a file only
/// needs to name what it changes. Without explicit `seeds`, the default seed
/// pages are built under the configured `base-url`.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Loads a configuration and returns it with the hash of the file it came from
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, config_hash(&content)))
}

/// SHA-256 of the configuration text, hex encoded
///
/// Logged at startup so a catalog run can be traced back to the exact file
/// that configured it.
pub fn config_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

fn parse_config(content: &str) -> ConfigResult<Config> {
    let mut config: Config = toml::from_str(content)?;

    let table: toml::Table = toml::from_str(content)?;
    let seeds_given = table
        .get("site")
        .and_then(|site| site.get("seeds"))
        .is_some();
    if !seeds_given {
        config.site.seeds = default_seeds(&config.site.base_url);
    }

    validate(&config)?;

    Ok(config)
}
