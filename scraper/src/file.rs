use std::path::PathBuf;

use async_trait::async_trait;
use common::ScrapeParams;
use serde_json::Value;

use crate::error::{Result, ScrapeError};
use crate::JobScraper;

/// Serves rows from a JSON file instead of a live backend.
///
/// Rows tagged with a `site` outside the requested sites are skipped, and at
/// most `results_wanted` rows are returned.
pub struct FileScraper {
    path: PathBuf,
}

impl FileScraper {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn site_selected(row: &Value, sites: &[String]) -> bool {
    match row.get("site").and_then(Value::as_str) {
        Some(site) => sites.iter().any(|selected| selected == site),
        None => true,
    }
}

#[async_trait]
impl JobScraper for FileScraper {
    async fn scrape(&self, params: &ScrapeParams) -> Result<Vec<Value>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ScrapeError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let rows: Vec<Value> = serde_json::from_str(&content)?;
        let total = rows.len();
        let rows: Vec<Value> = rows
            .into_iter()
            .filter(|row| site_selected(row, &params.site_name))
            .take(params.results_wanted as usize)
            .collect();

        tracing::info!(
            path = %self.path.display(),
            total,
            returned = rows.len(),
            "Loaded rows from fixture"
        );
        Ok(rows)
    }
}
