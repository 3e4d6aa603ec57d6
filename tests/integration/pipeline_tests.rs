//! Integration tests for the pipeline
//!
//! These tests use wiremock to serve a miniature Leo XIII site and run full
//! discovery + merge + persist passes against a temporary catalog file.

use leo_catalog::catalog::{Document, DocumentStore, JsonStore, StoreError, StoreResult};
use leo_catalog::config::Config;
use leo_catalog::crawler::{run_pipeline, Pipeline};
use leo_catalog::LeoError;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEED_PATH: &str = "/content/leo-xiii/en/encyclicals.index.html";

/// Creates a test configuration with the given seeds and catalog path
fn create_test_config(seeds: Vec<String>, catalog_path: &Path) -> Config {
    let mut config = Config::default();
    config.scraper.delay_secs = 0.0;
    config.scraper.timeout_secs = 5;
    config.site.seeds = seeds;
    config.output.catalog_path = catalog_path.to_string_lossy().into_owned();
    config
}

/// Serves `body` at `page_path`
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// A document page with a heading, a dated closing line and a long first paragraph
fn document_page(title: &str, date: &str) -> String {
    format!(
        r#"<html><head><title>{title} | Vatican</title></head><body>
        <h1>{title}</h1>
        <p>To our venerable brethren, the Patriarchs, Primates, Archbishops, and Bishops of the Catholic world.</p>
        <p>Given at St. Peter's in Rome, the {date}.</p>
        </body></html>"#
    )
}

/// Serves a seed page linking to the Latin and English Rerum Novarum and to
/// Libertas
async fn mount_small_site(server: &MockServer) {
    mount_page(
        server,
        SEED_PATH,
        r#"<html><body>
        <a href="/content/leo-xiii/la/encyclicals/documents/rerum-novarum.html">Rerum Novarum (la)</a>
        <a href="encyclicals/documents/rerum-novarum.html">Rerum Novarum</a>
        <a href="encyclicals/documents/libertas.html">Libertas</a>
        <a href="/content/leo-xiii/en/letters.index.html">Letters</a>
        <a href="https://elsewhere.example.org/">Elsewhere</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        server,
        "/content/leo-xiii/la/encyclicals/documents/rerum-novarum.html",
        document_page("Rerum Novarum", "15 May 1891"),
    )
    .await;
    mount_page(
        server,
        "/content/leo-xiii/en/encyclicals/documents/rerum-novarum.html",
        document_page("Rerum Novarum", "15 May 1891"),
    )
    .await;
    mount_page(
        server,
        "/content/leo-xiii/en/encyclicals/documents/libertas.html",
        document_page("Libertas", "20 June 1888"),
    )
    .await;
}

fn read_documents(catalog_path: &Path) -> Vec<Document> {
    JsonStore::open(catalog_path, "Leo XIII", "vatican.va")
        .documents()
        .to_vec()
}

#[tokio::test]
async fn test_full_pass_merges_translations() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config = create_test_config(
        vec![format!("{}{}", server.uri(), SEED_PATH)],
        &catalog_path,
    );

    let report = run_pipeline(config).await.expect("Pipeline failed");

    assert_eq!(report.candidates, 3);
    assert_eq!(report.processed, 3);
    assert_eq!(report.new_documents, 2);
    assert_eq!(report.updated_documents, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.total_documents, 2);

    let documents = read_documents(&catalog_path);
    assert_eq!(documents.len(), 2);

    let rerum = documents
        .iter()
        .find(|d| d.title == "Rerum Novarum")
        .expect("Rerum Novarum missing");
    assert_eq!(rerum.urls.len(), 2);
    assert_eq!(rerum.doc_type, "Encyclical");
    assert_eq!(rerum.date, "15 May 1891");
    assert_eq!(rerum.languages.len(), 2);
    assert!(rerum.languages.contains(&"English".to_string()));
    assert!(rerum.languages.contains(&"Latin".to_string()));
    assert!(rerum.description.starts_with("To our venerable brethren"));
    assert!(!rerum.read);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&catalog_path).unwrap()).unwrap();
    assert_eq!(raw["metadata"]["total_documents"], 2);
    assert_eq!(raw["metadata"]["pope"], "Leo XIII");
}

#[tokio::test]
async fn test_second_pass_is_idempotent() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let seeds = vec![format!("{}{}", server.uri(), SEED_PATH)];

    run_pipeline(create_test_config(seeds.clone(), &catalog_path))
        .await
        .expect("First pass failed");
    let first = read_documents(&catalog_path);

    let report = run_pipeline(create_test_config(seeds, &catalog_path))
        .await
        .expect("Second pass failed");
    let second = read_documents(&catalog_path);

    assert_eq!(report.new_documents, 0);
    assert_eq!(report.updated_documents, 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_user_annotations_survive_rescrape() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let seeds = vec![format!("{}{}", server.uri(), SEED_PATH)];

    run_pipeline(create_test_config(seeds.clone(), &catalog_path))
        .await
        .expect("First pass failed");

    // The reader annotates the catalog by hand
    let mut raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&catalog_path).unwrap()).unwrap();
    for doc in raw["documents"].as_array_mut().unwrap() {
        if doc["title"] == "Libertas" {
            doc["read"] = true.into();
            doc["comments"] = "x".into();
            doc["quotes"] = serde_json::json!(["Liberty, the highest of natural endowments"]);
            doc["rating"] = 5.into();
        }
    }
    std::fs::write(&catalog_path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    run_pipeline(create_test_config(seeds, &catalog_path))
        .await
        .expect("Second pass failed");

    let documents = read_documents(&catalog_path);
    let libertas = documents.iter().find(|d| d.title == "Libertas").unwrap();
    assert!(libertas.read);
    assert_eq!(libertas.comments, "x");
    assert_eq!(libertas.quotes.len(), 1);
    assert_eq!(libertas.extra.get("rating"), Some(&serde_json::Value::from(5)));
}

#[tokio::test]
async fn test_failed_fetches_are_skipped() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        SEED_PATH,
        r#"<a href="encyclicals/documents/present.html">Present</a>
        <a href="encyclicals/documents/gone.html">Gone</a>"#
            .to_string(),
    )
    .await;
    mount_page(
        &server,
        "/content/leo-xiii/en/encyclicals/documents/present.html",
        document_page("Immortale Dei", "1 November 1885"),
    )
    .await;
    // gone.html and the second seed are unmatched and answer 404

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config = create_test_config(
        vec![
            format!("{}/content/leo-xiii/la/missing.index.html", server.uri()),
            format!("{}{}", server.uri(), SEED_PATH),
        ],
        &catalog_path,
    );

    let report = run_pipeline(config).await.expect("Pipeline failed");

    assert_eq!(report.processed, 2);
    assert_eq!(report.new_documents, 1);
    assert_eq!(report.skipped, 1);

    let documents = read_documents(&catalog_path);
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].title, "Immortale Dei");
}

#[tokio::test]
async fn test_malformed_catalog_is_replaced() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    std::fs::write(&catalog_path, "{\"documents\": [ oops").unwrap();

    let config = create_test_config(
        vec![format!("{}{}", server.uri(), SEED_PATH)],
        &catalog_path,
    );
    let report = run_pipeline(config).await.expect("Pipeline failed");

    assert_eq!(report.total_documents, 2);
    assert_eq!(read_documents(&catalog_path).len(), 2);
}

/// Store wrapper recording the catalog size at every persist
struct CountingStore {
    inner: JsonStore,
    persisted_sizes: Vec<usize>,
}

impl DocumentStore for CountingStore {
    fn documents(&self) -> &[Document] {
        self.inner.documents()
    }

    fn documents_mut(&mut self) -> &mut Vec<Document> {
        self.inner.documents_mut()
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.persisted_sizes.push(self.inner.len());
        self.inner.persist()
    }
}

#[tokio::test]
async fn test_checkpoints_every_ten_candidates() {
    let server = MockServer::start().await;

    let links: String = (0..25)
        .map(|i| format!(r#"<a href="speeches/documents/speech-{i:02}.html">Speech {i}</a>"#))
        .collect();
    mount_page(&server, SEED_PATH, links).await;

    for i in 0..25 {
        mount_page(
            &server,
            &format!("/content/leo-xiii/en/speeches/documents/speech-{i:02}.html"),
            document_page(&format!("Allocution {i}"), "2 March 1900"),
        )
        .await;
    }

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config = create_test_config(
        vec![format!("{}{}", server.uri(), SEED_PATH)],
        &catalog_path,
    );
    let store = CountingStore {
        inner: JsonStore::open(&catalog_path, "Leo XIII", "vatican.va"),
        persisted_sizes: Vec::new(),
    };

    let mut pipeline = Pipeline::new(config, store).expect("Failed to build pipeline");
    let report = pipeline.run().await.expect("Pipeline failed");

    assert_eq!(report.processed, 25);
    assert_eq!(report.checkpoints, 2);

    let store = pipeline.into_store();
    // Two checkpoints after #10 and #20, then the final persist
    assert_eq!(store.persisted_sizes, vec![10, 20, 25]);

    let documents = read_documents(&catalog_path);
    assert_eq!(documents.len(), 25);
    assert!(documents.iter().all(|d| d.doc_type == "Speech"));
}

/// Store whose first `failures` persists fail, as on a full disk
struct FlakyStore {
    inner: JsonStore,
    failures: usize,
    attempts: usize,
}

impl DocumentStore for FlakyStore {
    fn documents(&self) -> &[Document] {
        self.inner.documents()
    }

    fn documents_mut(&mut self) -> &mut Vec<Document> {
        self.inner.documents_mut()
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.attempts += 1;
        if self.attempts <= self.failures {
            return Err(StoreError::Io(std::io::Error::other("No space left on device")));
        }
        self.inner.persist()
    }
}

#[tokio::test]
async fn test_failed_checkpoint_does_not_stop_the_run() {
    let server = MockServer::start().await;

    let links: String = (0..25)
        .map(|i| format!(r#"<a href="letters/documents/letter-{i:02}.html">Letter {i}</a>"#))
        .collect();
    mount_page(&server, SEED_PATH, links).await;

    for i in 0..25 {
        mount_page(
            &server,
            &format!("/content/leo-xiii/en/letters/documents/letter-{i:02}.html"),
            document_page(&format!("Epistola {i}"), "8 September 1899"),
        )
        .await;
    }

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config = create_test_config(
        vec![format!("{}{}", server.uri(), SEED_PATH)],
        &catalog_path,
    );
    let store = FlakyStore {
        inner: JsonStore::open(&catalog_path, "Leo XIII", "vatican.va"),
        failures: 1,
        attempts: 0,
    };

    let mut pipeline = Pipeline::new(config, store).expect("Failed to build pipeline");
    let report = pipeline.run().await.expect("Pipeline failed");

    assert_eq!(report.processed, 25);
    assert_eq!(report.new_documents, 25);
    // The checkpoint after #10 failed; the one after #20 succeeded
    assert_eq!(report.checkpoints, 1);
    assert_eq!(pipeline.store().attempts, 3);
    assert_eq!(read_documents(&catalog_path).len(), 25);
}

#[tokio::test]
async fn test_final_persist_failure_is_returned() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config = create_test_config(
        vec![format!("{}{}", server.uri(), SEED_PATH)],
        &catalog_path,
    );
    let store = FlakyStore {
        inner: JsonStore::open(&catalog_path, "Leo XIII", "vatican.va"),
        failures: usize::MAX,
        attempts: 0,
    };

    let mut pipeline = Pipeline::new(config, store).expect("Failed to build pipeline");
    let result = pipeline.run().await;

    assert!(matches!(result, Err(LeoError::Store(_))));
    assert!(!catalog_path.exists());
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_fetching() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config = create_test_config(Vec::new(), &catalog_path);

    let result = run_pipeline(config).await;

    assert!(matches!(result, Err(LeoError::Config(_))));
    assert!(!catalog_path.exists());
}
