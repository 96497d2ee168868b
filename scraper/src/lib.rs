//! Access to the external job scraping capability.
//!
//! The scraping itself (Indeed, LinkedIn, ...) happens elsewhere. This crate
//! only knows how to ask for a batch of raw rows and how to run those rows
//! through the normalization pipeline in `common`.

pub mod error;
pub mod file;
pub mod http;
pub mod pipeline;

pub use error::{Result, ScrapeError};
pub use file::FileScraper;
pub use http::HttpScraper;
pub use pipeline::run_scrape;

use async_trait::async_trait;
use common::ScrapeParams;
use serde_json::Value;

/// A source of raw, loosely-typed job rows.
///
/// One call per request; failures are terminal and never retried.
#[async_trait]
pub trait JobScraper: Send + Sync {
    async fn scrape(&self, params: &ScrapeParams) -> Result<Vec<Value>>;
}
