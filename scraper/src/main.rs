//! One-shot job scrape
//!
//! Runs a single search through the scraping backend and the normalization
//! pipeline, then saves the resulting jobs to data/jobs.json

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use common::{ScrapeRequest, split_sites};
use scraper::{FileScraper, HttpScraper, JobScraper, run_scrape};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scraper")]
#[command(about = "Run one job search and save the normalized results")]
struct Cli {
    #[arg(long)]
    search_term: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// fulltime, parttime, internship or contract
    #[arg(long)]
    job_type: Option<String>,

    #[arg(long)]
    remote: bool,

    #[arg(long, default_value_t = 50)]
    results_wanted: u32,

    #[arg(long)]
    hours_old: Option<u32>,

    /// Minimum salary in thousands per year
    #[arg(long)]
    min_salary: Option<u32>,

    /// Maximum salary in thousands per year
    #[arg(long)]
    max_salary: Option<u32>,

    /// Comma-separated job boards, e.g. indeed,linkedin
    #[arg(long)]
    sites: Option<String>,

    #[arg(long, default_value = "usa")]
    country: String,

    /// Base URL of the JobSpy backend
    #[arg(long, env = "JOBSPY_BACKEND_URL")]
    backend_url: Option<String>,

    /// Read raw rows from this JSON file instead of calling a backend
    #[arg(long, env = "JOBSPY_FIXTURE_PATH")]
    fixture: Option<PathBuf>,

    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    #[arg(long, default_value = "data/jobs.json")]
    output: PathBuf,
}

impl Cli {
    fn request(&self) -> ScrapeRequest {
        ScrapeRequest {
            search_term: self.search_term.clone(),
            location: self.location.clone(),
            job_type: self.job_type.clone(),
            is_remote: self.remote,
            results_wanted: Some(self.results_wanted),
            hours_old: self.hours_old,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            site_name: self.sites.as_deref().map(split_sites),
            country: Some(self.country.clone()),
        }
    }

    fn backend(&self) -> anyhow::Result<Box<dyn JobScraper>> {
        if let Some(path) = &self.fixture {
            return Ok(Box::new(FileScraper::new(path)));
        }
        let Some(url) = &self.backend_url else {
            bail!("either --fixture or --backend-url must be given");
        };
        let scraper = HttpScraper::new(url, Duration::from_secs(self.timeout_secs))?;
        Ok(Box::new(scraper))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let backend = cli.backend()?;
    let request = cli.request();

    let response = run_scrape(backend.as_ref(), &request).await;
    if !response.success() {
        bail!(response.error().unwrap_or("scrape failed").to_string());
    }
    tracing::info!(count = response.count(), "Total jobs after normalization");

    if let Some(dir) = cli.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let json_output = serde_json::to_string_pretty(response.jobs())?;
    tokio::fs::write(&cli.output, json_output)
        .await
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(path = %cli.output.display(), "Saved jobs");
    Ok(())
}
