use serde::Deserialize;

/// Root of the vatican.va site
pub const DEFAULT_BASE_URL: &str = "https://www.vatican.va";

/// Default catalog file name
pub const DEFAULT_CATALOG_PATH: &str = "pope_leo_documents.json";

/// Main configuration structure for Leo-Catalog
///
/// Every section and field has a default, so an empty TOML file is a valid
/// configuration describing the Leo XIII section of vatican.va.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// Request pacing and checkpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Fixed delay before every request (seconds)
    #[serde(rename = "delay-secs")]
    pub delay_secs: f64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Persist the catalog after this many processed candidates
    #[serde(rename = "checkpoint-interval")]
    pub checkpoint_interval: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            delay_secs: 1.0,
            timeout_secs: 30,
            checkpoint_interval: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// Parenthesised comment appended to the product token
    pub comment: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "LeoCatalog".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            comment: "compatible; Academic Research Bot".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (comment)`
    pub fn header_value(&self) -> String {
        if self.comment.is_empty() {
            format!("{}/{}", self.crawler_name, self.crawler_version)
        } else {
            format!(
                "{}/{} ({})",
                self.crawler_name, self.crawler_version, self.comment
            )
        }
    }
}

/// Description of the site section being cataloged
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root; seeds default to the known index pages under it
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path fragments that mark a page as belonging to the author
    #[serde(rename = "author-segments")]
    pub author_segments: Vec<String>,

    /// Extension every document page ends with
    #[serde(rename = "document-extension")]
    pub document_extension: String,

    /// Language assumed when the URL carries no language code
    #[serde(rename = "default-language")]
    pub default_language: String,

    /// Index and landing pages that link to document pages
    pub seeds: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            author_segments: vec!["/leo-xiii/".to_string(), "/leo_xiii/".to_string()],
            document_extension: ".html".to_string(),
            default_language: "Latin".to_string(),
            seeds: default_seeds(DEFAULT_BASE_URL),
        }
    }
}

/// Known Leo XIII index and landing pages under `base_url`
pub fn default_seeds(base_url: &str) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    [
        // Encyclicals
        "en/encyclicals.index.html",
        "la/encyclicals.index.html",
        "it/encyclicals.index.html",
        // Letters
        "en/letters.index.html",
        "la/letters.index.html",
        // Speeches
        "en/speeches.index.html",
        "la/speeches.index.html",
        // Landing pages
        "en.html",
        "la.html",
        "it.html",
    ]
    .iter()
    .map(|page| format!("{base}/content/leo-xiii/{page}"))
    .collect()
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON catalog file
    #[serde(rename = "catalog-path")]
    pub catalog_path: String,

    /// Author recorded in the catalog metadata
    pub author: String,

    /// Source label recorded in the catalog metadata
    #[serde(rename = "source-label")]
    pub source_label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            author: "Leo XIII".to_string(),
            source_label: "vatican.va".to_string(),
        }
    }
}
