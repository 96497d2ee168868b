//! Caller-facing scrape request and its translation into the backend's
//! vocabulary.

use serde::{Deserialize, Deserializer, Serialize};

use crate::filter::SalaryRange;

pub const DEFAULT_RESULTS_WANTED: u32 = 50;

/// Boards queried when the caller does not name any.
pub const DEFAULT_SITES: [&str; 4] = ["indeed", "linkedin", "zip_recruiter", "glassdoor"];

const LINKEDIN: &str = "linkedin";

const COUNTRY_TABLE: [(&str, Country); 9] = [
    ("usa", Country::Usa),
    ("us", Country::Usa),
    ("united states", Country::Usa),
    ("canada", Country::Canada),
    ("uk", Country::Uk),
    ("united kingdom", Country::Uk),
    ("australia", Country::Australia),
    ("germany", Country::Germany),
    ("france", Country::France),
];

/// Search parameters as sent by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// `fulltime`, `parttime`, `internship` or `contract`; anything else is ignored.
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_remote: bool,
    #[serde(default)]
    pub results_wanted: Option<u32>,
    #[serde(default)]
    pub hours_old: Option<u32>,
    /// Thousands per year.
    #[serde(default)]
    pub min_salary: Option<u32>,
    /// Thousands per year.
    #[serde(default)]
    pub max_salary: Option<u32>,
    #[serde(default)]
    pub site_name: Option<Vec<String>>,
    #[serde(default)]
    pub country: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Fulltime,
    Parttime,
    Internship,
    Contract,
}

impl JobType {
    pub fn parse(job_type: &str) -> Option<Self> {
        match job_type.trim().to_ascii_lowercase().as_str() {
            "fulltime" => Some(JobType::Fulltime),
            "parttime" => Some(JobType::Parttime),
            "internship" => Some(JobType::Internship),
            "contract" => Some(JobType::Contract),
            _ => None,
        }
    }
}

/// Country names the Indeed and Glassdoor scrapers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Country {
    #[default]
    #[serde(rename = "USA")]
    Usa,
    Canada,
    #[serde(rename = "UK")]
    Uk,
    Australia,
    Germany,
    France,
}

impl Country {
    /// Case-insensitive lookup; unknown or missing names fall back to USA.
    pub fn lookup(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Country::default();
        };
        let name = name.trim().to_lowercase();

        COUNTRY_TABLE
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, country)| *country)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionFormat {
    #[default]
    Markdown,
}

/// What the scraping backend is actually asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeParams {
    pub site_name: Vec<String>,
    pub search_term: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub is_remote: bool,
    pub results_wanted: u32,
    pub hours_old: Option<u32>,
    pub country_indeed: Country,
    pub linkedin_fetch_description: bool,
    pub description_format: DescriptionFormat,
}

/// Splits a comma-separated `site_name` query value.
pub fn split_sites(sites: &str) -> Vec<String> {
    sites
        .split(',')
        .map(str::trim)
        .filter(|site| !site.is_empty())
        .map(str::to_string)
        .collect()
}

impl ScrapeRequest {
    pub fn sites(&self) -> Vec<String> {
        match &self.site_name {
            Some(sites) if !sites.is_empty() => sites.clone(),
            _ => DEFAULT_SITES.iter().map(|site| site.to_string()).collect(),
        }
    }

    /// A bound of 0 counts as not given, on either side.
    pub fn salary_range(&self) -> SalaryRange {
        SalaryRange::new(
            self.min_salary.filter(|min| *min != 0),
            self.max_salary.filter(|max| *max != 0),
        )
    }

    pub fn normalize(&self) -> ScrapeParams {
        let site_name = self.sites();
        let linkedin_fetch_description = site_name.iter().any(|site| site == LINKEDIN);

        ScrapeParams {
            search_term: self.search_term.clone(),
            location: self.location.clone(),
            job_type: self.job_type.as_deref().and_then(JobType::parse),
            is_remote: self.is_remote,
            results_wanted: self
                .results_wanted
                .filter(|wanted| *wanted > 0)
                .unwrap_or(DEFAULT_RESULTS_WANTED),
            hours_old: self.hours_old,
            country_indeed: Country::lookup(self.country.as_deref()),
            linkedin_fetch_description,
            description_format: DescriptionFormat::Markdown,
            site_name,
        }
    }
}
