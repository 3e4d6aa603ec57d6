//! Crawler module for page fetching and pipeline orchestration
//!
//! This module contains the scraping logic, including:
//! - Paced HTTP fetching that fails soft
//! - Candidate discovery from seed pages
//! - The discovery → extraction → merge → persist pipeline

mod discovery;
mod fetcher;
mod pipeline;

pub use discovery::discover_candidates;
pub use fetcher::{build_http_client, FetchResult, FetchedPage, Fetcher};
pub use pipeline::{run_pipeline, Pipeline};
