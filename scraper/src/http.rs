use std::time::Duration;

use async_trait::async_trait;
use common::ScrapeParams;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ScrapeError};
use crate::JobScraper;

const SCRAPE_PATH: &str = "/scrape-jobs";

/// Backends answer with either a bare array of rows or `{"jobs": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowsPayload {
    Rows(Vec<Value>),
    Wrapped { jobs: Vec<Value> },
}

/// Client for a JobSpy-compatible scraping backend reachable over HTTP.
pub struct HttpScraper {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScraper {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl JobScraper for HttpScraper {
    async fn scrape(&self, params: &ScrapeParams) -> Result<Vec<Value>> {
        let url = format!("{}{}", self.base_url, SCRAPE_PATH);
        tracing::info!(
            url = %url,
            sites = ?params.site_name,
            results_wanted = params.results_wanted,
            "Requesting scrape from backend"
        );

        let resp = self.client.post(&url).json(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let rows = match serde_json::from_str::<RowsPayload>(&body)? {
            RowsPayload::Rows(rows) => rows,
            RowsPayload::Wrapped { jobs } => jobs,
        };
        tracing::debug!(count = rows.len(), "Backend returned rows");

        Ok(rows)
    }
}
