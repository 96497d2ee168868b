use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use common::{ScrapeRequest, ScrapeResponse, split_sites};
use scraper::run_scrape;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Query parameters for `GET /scrape`
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeQuery {
    search_term: Option<String>,
    location: Option<String>,
    job_type: Option<String>,
    #[serde(default, deserialize_with = "query_flag")]
    is_remote: Option<bool>,
    results_wanted: Option<u32>,
    hours_old: Option<u32>,
    min_salary: Option<u32>,
    max_salary: Option<u32>,
    /// Comma-separated site list
    site_name: Option<String>,
    country: Option<String>,
}

/// Query-string booleans: `true`/`1`/`yes`/`on`/`t`/`y` and their negatives.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

fn query_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_flag(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid boolean {value:?}")))
}

impl From<ScrapeQuery> for ScrapeRequest {
    fn from(query: ScrapeQuery) -> Self {
        ScrapeRequest {
            search_term: query.search_term,
            location: query.location,
            job_type: query.job_type,
            is_remote: query.is_remote.unwrap_or(false),
            results_wanted: query.results_wanted,
            hours_old: query.hours_old,
            min_salary: query.min_salary,
            max_salary: query.max_salary,
            site_name: query.site_name.as_deref().map(split_sites),
            country: query.country,
        }
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "jobspy-service",
    })
}

/// Handler for POST /scrape
pub async fn scrape_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(scrape(&state, request).await))
}

/// Handler for GET /scrape?search_term=...&site_name=indeed,linkedin
pub async fn scrape_query_handler(
    State(state): State<AppState>,
    query: Result<Query<ScrapeQuery>, QueryRejection>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let Query(query) = query?;
    Ok(Json(scrape(&state, query.into()).await))
}

async fn scrape(state: &AppState, request: ScrapeRequest) -> ScrapeResponse {
    tracing::info!(?request, "Received scrape request");
    run_scrape(state.scraper.as_ref(), &request).await
}
