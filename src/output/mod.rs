//! Output module for run reports and catalog statistics
//!
//! This module handles:
//! - The counters reported at the end of a pipeline pass
//! - Statistics over an existing catalog file

mod report;
pub mod stats;

pub use report::{print_report, RunReport};
pub use stats::{load_statistics, print_statistics, CatalogStatistics};
