use crate::config::SiteConfig;
use url::Url;

/// Decides whether a resolved link is a candidate document page
///
/// A link is accepted iff:
/// 1. its path lies under one of the author's path segments
/// 2. it ends with the document-page extension (no query string after it)
/// 3. it is not an index/listing page
/// 4. it is not the page it was found on
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    author_segments: Vec<String>,
    document_extension: String,
}

impl CandidateFilter {
    /// Creates a filter from the site description
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            author_segments: site
                .author_segments
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect(),
            document_extension: site.document_extension.clone(),
        }
    }

    /// Returns true if `link`, found on `seed`, should be fetched as a document
    pub fn accepts(&self, link: &Url, seed: &Url) -> bool {
        let path = link.path();

        if !self.author_segments.iter().any(|s| path.contains(s.as_str())) {
            return false;
        }

        if link.query().is_some() || !path.ends_with(&self.document_extension) {
            return false;
        }

        if is_index_page(link) {
            return false;
        }

        link != seed
    }
}

/// Returns true for listing pages such as `index.html` or
/// `encyclicals.index.html`
pub fn is_index_page(url: &Url) -> bool {
    let last = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    last == "index.html" || last.ends_with(".index.html")
}
