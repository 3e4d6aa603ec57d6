//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building the HTTP client with the identifying user agent and timeout
//! - A fixed courtesy delay before every request
//! - Error classification at the fetch boundary
//!
//! Failures never propagate: callers get `None` and a log line.

use crate::config::{Config, UserAgentConfig};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

impl FetchedPage {
    /// Parses the body into an HTML document
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success(FetchedPage),

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `timeout` - Overall per-request timeout
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Paced, sequential page fetcher
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher from the scraper and user agent configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.scraper.timeout_secs),
        )?;
        Ok(Self::with_client(
            client,
            Duration::from_secs_f64(config.scraper.delay_secs),
        ))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client, delay: Duration) -> Self {
        Self { client, delay }
    }

    /// Delay applied before every request
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits the courtesy delay, then requests `url`
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | Success |
    /// | Any other status | HttpError |
    /// | Timeout | NetworkError |
    /// | Connection failure | NetworkError |
    /// | Body read failure | NetworkError |
    pub async fn fetch_url(&self, url: &Url) -> FetchResult {
        tokio::time::sleep(self.delay).await;

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                let error = if e.is_timeout() {
                    "Request timeout".to_string()
                } else if e.is_connect() {
                    format!("Connection failed: {}", e)
                } else {
                    e.to_string()
                };
                return FetchResult::NetworkError { error };
            }
        };

        let status = response.status();
        if !status.is_success() {
            return FetchResult::HttpError {
                status_code: status.as_u16(),
            };
        }

        match response.text().await {
            Ok(body) => FetchResult::Success(FetchedPage {
                status_code: status.as_u16(),
                body,
            }),
            Err(e) => FetchResult::NetworkError {
                error: e.to_string(),
            },
        }
    }

    /// Fetches `url`, converting every failure into `None`
    pub async fn fetch(&self, url: &Url) -> Option<FetchedPage> {
        match self.fetch_url(url).await {
            FetchResult::Success(page) => {
                tracing::debug!(
                    "Fetched {} (HTTP {}, {} bytes)",
                    url,
                    page.status_code,
                    page.body.len()
                );
                Some(page)
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Error fetching {}: HTTP {}", url, status_code);
                None
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Error fetching {}: {}", url, error);
                None
            }
        }
    }
}
