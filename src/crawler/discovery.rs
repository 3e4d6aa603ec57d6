//! Candidate discovery from seed pages

use crate::crawler::fetcher::Fetcher;
use crate::links::{extract_links, CandidateFilter};
use std::collections::BTreeSet;
use url::Url;

/// Collects candidate document URLs from every seed page
///
/// Seeds are fetched one after the other; a seed that cannot be parsed or
/// fetched is logged and skipped. The returned set is ordered, so repeated
/// runs process candidates in the same order.
pub async fn discover_candidates(
    fetcher: &Fetcher,
    seeds: &[String],
    filter: &CandidateFilter,
) -> BTreeSet<Url> {
    let mut candidates = BTreeSet::new();

    for seed in seeds {
        tracing::info!("Checking: {}", seed);

        let seed_url = match Url::parse(seed) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping invalid seed URL {}: {}", seed, e);
                continue;
            }
        };

        let Some(page) = fetcher.fetch(&seed_url).await else {
            continue;
        };

        let links = {
            let document = page.document();
            extract_links(&document, &seed_url)
        };

        let before = candidates.len();
        for link in links {
            if filter.accepts(&link, &seed_url) {
                candidates.insert(link);
            } else {
                tracing::trace!("Ignoring link {}", link);
            }
        }

        tracing::debug!(
            "Seed {} contributed {} new candidates",
            seed,
            candidates.len() - before
        );
    }

    candidates
}
