//! Pipeline orchestration
//!
//! One pass: discover candidates from the seeds, then for each candidate
//! fetch, extract and merge into the store, persisting every N processed
//! candidates and once more at the end.

use crate::catalog::{DocumentStore, JsonStore};
use crate::config::{validate, Config};
use crate::crawler::discovery::discover_candidates;
use crate::crawler::fetcher::Fetcher;
use crate::extract::extract_record;
use crate::links::CandidateFilter;
use crate::output::RunReport;
use crate::Result;
use std::collections::BTreeSet;
use std::time::Instant;
use url::Url;

/// How a single candidate ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateOutcome {
    New,
    Updated,
    Skipped,
}

/// Sequential discovery → extraction → merge pipeline over a store
pub struct Pipeline<S: DocumentStore> {
    config: Config,
    fetcher: Fetcher,
    filter: CandidateFilter,
    store: S,
}

impl<S: DocumentStore> Pipeline<S> {
    /// Validates `config` and creates a pipeline with an HTTP fetcher built
    /// from it
    pub fn new(config: Config, store: S) -> Result<Self> {
        validate(&config)?;
        let fetcher = Fetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher, store))
    }

    /// Creates a pipeline around an existing fetcher
    pub fn with_fetcher(config: Config, fetcher: Fetcher, store: S) -> Self {
        let filter = CandidateFilter::new(&config.site);
        Self {
            config,
            fetcher,
            filter,
            store,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the pipeline, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Collects the candidate URL set from the configured seeds
    pub async fn discover(&self) -> BTreeSet<Url> {
        discover_candidates(&self.fetcher, &self.config.site.seeds, &self.filter).await
    }

    /// Runs one full pass
    ///
    /// Per-candidate failures are skipped and failed checkpoints are logged;
    /// only a failure of the final persist is returned.
    pub async fn run(&mut self) -> Result<RunReport> {
        let start_time = Instant::now();
        tracing::info!(
            "Starting scrape of {} seed pages",
            self.config.site.seeds.len()
        );

        let candidates = self.discover().await;
        tracing::info!("Found {} potential document pages", candidates.len());

        let interval = self.config.scraper.checkpoint_interval.max(1);
        let mut report = RunReport {
            candidates: candidates.len(),
            ..RunReport::default()
        };

        for url in &candidates {
            tracing::info!(
                "Processing ({}/{}): {}",
                report.processed + 1,
                candidates.len(),
                url
            );

            match self.process_candidate(url).await {
                CandidateOutcome::New => report.new_documents += 1,
                CandidateOutcome::Updated => report.updated_documents += 1,
                CandidateOutcome::Skipped => report.skipped += 1,
            }

            report.processed += 1;

            // Checkpoint every N processed candidates
            if report.processed % interval == 0 {
                match self.store.persist() {
                    Ok(()) => report.checkpoints += 1,
                    Err(e) => tracing::error!(
                        "Checkpoint after {} candidates failed: {}",
                        report.processed,
                        e
                    ),
                }
            }
        }

        self.store.persist()?;

        report.total_documents = self.store.len();
        report.elapsed = start_time.elapsed();
        tracing::info!(
            "Scrape completed: {} processed, {} new, {} updated in {:?}",
            report.processed,
            report.new_documents,
            report.updated_documents,
            report.elapsed
        );

        Ok(report)
    }

    /// Fetches, extracts and merges one candidate
    async fn process_candidate(&mut self, url: &Url) -> CandidateOutcome {
        let Some(page) = self.fetcher.fetch(url).await else {
            return CandidateOutcome::Skipped;
        };

        let record = {
            let document = page.document();
            extract_record(&document, url, &self.config.site.default_language)
        };

        let existed = self.store.resolve(&record.title, &record.url).is_some();
        self.store.upsert(&record);

        if existed {
            CandidateOutcome::Updated
        } else {
            CandidateOutcome::New
        }
    }
}

/// Runs a complete pass against the JSON catalog named in `config`
///
/// # Example
///
/// ```no_run
/// use leo_catalog::config::Config;
/// use leo_catalog::crawler::run_pipeline;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_pipeline(Config::default()).await?;
/// println!("{} documents in catalog", report.total_documents);
/// # Ok(())
/// # }
/// ```
pub async fn run_pipeline(config: Config) -> Result<RunReport> {
    let store = JsonStore::open(
        &config.output.catalog_path,
        &config.output.author,
        &config.output.source_label,
    );
    let mut pipeline = Pipeline::new(config, store)?;
    pipeline.run().await
}
