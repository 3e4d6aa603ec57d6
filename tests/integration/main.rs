//! Integration tests for the scrape pipeline

mod pipeline_tests;
