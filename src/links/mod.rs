//! Link handling for Leo-Catalog
//!
//! This module extracts hyperlinks from seed pages, resolves them to
//! absolute URLs, and decides which of them are candidate document pages.

mod filter;
mod resolve;

pub use filter::{is_index_page, CandidateFilter};
pub use resolve::{extract_links, resolve_link};
