use common::{ScrapeRequest, ScrapeResponse, filter_by_salary, map_records};

use crate::JobScraper;

/// Runs one request end to end: normalize, scrape, map, filter.
///
/// A backend failure becomes an unsuccessful response rather than an error.
pub async fn run_scrape<S>(scraper: &S, request: &ScrapeRequest) -> ScrapeResponse
where
    S: JobScraper + ?Sized,
{
    let params = request.normalize();
    tracing::info!(
        sites = ?params.site_name,
        job_type = ?params.job_type,
        location = ?params.location,
        "Scraping from sites"
    );

    let rows = match scraper.scrape(&params).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "JobSpy scraping error");
            return ScrapeResponse::failed(format!("JobSpy scraping failed: {e}"));
        }
    };
    tracing::info!(count = rows.len(), "JobSpy returned jobs");

    if rows.is_empty() {
        return ScrapeResponse::ok(Vec::new());
    }

    let jobs = map_records(rows);
    let jobs = filter_by_salary(jobs, request.salary_range());
    ScrapeResponse::ok(jobs)
}
