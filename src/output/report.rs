//! Run-level counters for a single pipeline pass

use std::time::Duration;

/// Counters reported at the end of a pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Candidate URLs found on the seed pages
    pub candidates: usize,
    /// Candidates handled, including skipped ones
    pub processed: usize,
    /// Candidates that created a new document
    pub new_documents: usize,
    /// Candidates merged into an existing document
    pub updated_documents: usize,
    /// Candidates whose page could not be fetched
    pub skipped: usize,
    /// Successful mid-run persists
    pub checkpoints: usize,
    /// Documents in the catalog after the final persist
    pub total_documents: usize,
    /// Wall time of the pass
    pub elapsed: Duration,
}

/// Prints the end-of-run summary to stdout
pub fn print_report(report: &RunReport) {
    println!();
    println!("Scraping completed!");
    println!("Total documents processed: {}", report.processed);
    println!("New documents added: {}", report.new_documents);
    println!("Documents updated: {}", report.updated_documents);
    if report.skipped > 0 {
        println!("Pages skipped (fetch failed): {}", report.skipped);
    }
    println!("Total documents in database: {}", report.total_documents);
}
