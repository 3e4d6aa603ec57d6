//! Leo-Catalog main entry point
//!
//! This is the command-line interface for the Leo XIII document catalog.

use anyhow::Context;
use clap::Parser;
use leo_catalog::catalog::JsonStore;
use leo_catalog::config::{load_config_with_hash, validate, Config};
use leo_catalog::crawler::run_pipeline;
use leo_catalog::output::{load_statistics, print_report, print_statistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Leo-Catalog: scrape vatican.va for Pope Leo XIII documents
///
/// Discovers document pages from the Leo XIII index pages, extracts their
/// metadata, and merges it into a JSON catalog while keeping read status,
/// comments and quotes intact.
#[derive(Parser, Debug)]
#[command(name = "leo-catalog")]
#[command(version)]
#[command(about = "Scrape vatican.va for Pope Leo XIII documents", long_about = None)]
struct Cli {
    /// Output JSON file (default: pope_leo_documents.json)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Delay between requests in seconds (default: 1.0)
    #[arg(short, long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration and seeds without scraping
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics of the existing catalog and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config);
    } else {
        handle_scrape(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("leo_catalog=info,warn"),
            1 => EnvFilter::new("leo_catalog=debug,info"),
            _ => EnvFilter::new("leo_catalog=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.catalog_path = output.to_string_lossy().into_owned();
    }
    if let Some(delay) = cli.delay {
        config.scraper.delay_secs = delay;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Leo-Catalog Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  Delay between requests: {}s", config.scraper.delay_secs);
    println!("  Request timeout: {}s", config.scraper.timeout_secs);
    println!(
        "  Checkpoint every: {} documents",
        config.scraper.checkpoint_interval
    );
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nSite:");
    println!("  Author segments: {}", config.site.author_segments.join(", "));
    println!("  Document extension: {}", config.site.document_extension);
    println!("  Default language: {}", config.site.default_language);

    println!("\nOutput:");
    println!("  Catalog: {}", config.output.catalog_path);

    println!("\nSeeds ({}):", config.site.seeds.len());
    for seed in &config.site.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: summarizes the existing catalog
fn handle_stats(config: &Config) {
    println!("Catalog: {}\n", config.output.catalog_path);

    let store = JsonStore::open(
        &config.output.catalog_path,
        &config.output.author,
        &config.output.source_label,
    );
    let stats = load_statistics(store.catalog());
    print_statistics(&stats);
}

/// Handles the scrape: one full discovery + merge + persist pass
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting Vatican website scrape for {} documents",
        config.output.author
    );

    let report = run_pipeline(config).await.context("Scrape failed")?;
    print_report(&report);

    Ok(())
}
