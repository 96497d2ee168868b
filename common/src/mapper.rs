use chrono::{Local, NaiveDate};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::MappingError;
use crate::job::{COMPANY_PLACEHOLDER, Job, LOCATION_PLACEHOLDER, TITLE_PLACEHOLDER};
use crate::raw::RawRecord;
use crate::salary::normalize_salary;

const ID_PREFIX: &str = "jobspy";
const UNKNOWN_SITE: &str = "unknown";
const EMPTY_DESCRIPTIONS: [&str; 3] = ["nan", "none", ""];

/// Builds a job id from its site, url and title.
///
/// Identical triples always give identical ids.
pub fn job_id(site: Option<&str>, url: Option<&str>, title: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.unwrap_or_default().as_bytes());
    hasher.update(title.unwrap_or_default().as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!(
        "{ID_PREFIX}_{}_{}",
        site.unwrap_or(UNKNOWN_SITE),
        &digest[..16]
    )
}

fn clean_description(description: Option<String>) -> Option<String> {
    let description = description?;
    let trimmed = description.trim();
    let lowered = trimmed.to_lowercase();

    if EMPTY_DESCRIPTIONS.contains(&lowered.as_str()) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Job {
    /// Maps one record, filling a missing posting date with `today`.
    pub fn from_raw(raw: RawRecord, today: NaiveDate) -> Self {
        let id = job_id(
            raw.site.as_deref(),
            raw.job_url.as_deref(),
            raw.title.as_deref(),
        );
        let salary = normalize_salary(
            raw.min_amount,
            raw.max_amount,
            raw.interval.unwrap_or_default(),
        );

        Job {
            id,
            title: raw.title.unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            company: raw.company.unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string()),
            location: raw
                .location
                .unwrap_or_else(|| LOCATION_PLACEHOLDER.to_string()),
            posted_date: raw
                .date_posted
                .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            description: clean_description(raw.description),
            url: raw.job_url,
            salary,
            job_type: raw.job_type,
            site: raw.site,
        }
    }
}

/// Maps a single raw row into a job.
pub fn map_record(value: Value) -> Result<Job, MappingError> {
    let raw = RawRecord::from_value(value)?;
    Ok(Job::from_raw(raw, Local::now().date_naive()))
}

/// Maps a batch of rows, preserving order.
///
/// Rows that fail to map are logged and skipped.
pub fn map_records(values: impl IntoIterator<Item = Value>) -> Vec<Job> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match map_record(value) {
            Ok(job) => Some(job),
            Err(e) => {
                tracing::warn!(index, error = %e, "Error converting job row");
                None
            }
        })
        .collect()
}
