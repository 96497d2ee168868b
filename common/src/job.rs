use serde::{Deserialize, Serialize};

pub const TITLE_PLACEHOLDER: &str = "Job Title Not Available";
pub const COMPANY_PLACEHOLDER: &str = "Company not specified";
pub const LOCATION_PLACEHOLDER: &str = "Location not specified";

/// Canonical job listing returned to callers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// `YYYY-MM-DD` when we had to fill it in, otherwise whatever the board sent.
    pub posted_date: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub site: Option<String>,
}

/// Response envelope for a scrape request.
///
/// Built through [`ScrapeResponse::ok`] or [`ScrapeResponse::failed`] so that
/// `count` always matches `jobs`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScrapeResponse {
    success: bool,
    jobs: Vec<Job>,
    count: usize,
    error: Option<String>,
}

impl ScrapeResponse {
    pub fn ok(jobs: Vec<Job>) -> Self {
        Self {
            success: true,
            count: jobs.len(),
            jobs,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            jobs: Vec::new(),
            count: 0,
            error: Some(error.into()),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
