use std::sync::LazyLock;

use regex::Regex;

use crate::job::Job;

static SALARY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)k").expect("salary token pattern is valid"));

/// Salary strings that mean "nothing known".
const UNSPECIFIED_SALARIES: [&str; 2] = ["salary not specified", "none"];

/// Requested salary bounds in thousands per year, both inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl SalaryRange {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// A minimum above the maximum; such a range matches nothing.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// True when `[low, high]` intersects the requested range.
    pub fn overlaps(&self, low: u64, high: u64) -> bool {
        if self.is_inverted() {
            return false;
        }
        let min = self.min.map_or(0, u64::from);
        high >= min && self.max.is_none_or(|max| low <= u64::from(max))
    }

    /// Jobs without a parseable salary never match a range.
    pub fn admits(&self, job: &Job) -> bool {
        let Some(salary) = job.salary.as_deref() else {
            return false;
        };
        if UNSPECIFIED_SALARIES.contains(&salary.to_lowercase().as_str()) {
            return false;
        }

        parse_salary_bounds(salary).is_some_and(|(low, high)| self.overlaps(low, high))
    }
}

/// Extracts the lowest and highest `$<N>k` values from a salary string.
pub fn parse_salary_bounds(salary: &str) -> Option<(u64, u64)> {
    let values: Vec<u64> = SALARY_TOKEN
        .captures_iter(salary)
        .filter_map(|cap| cap[1].parse().ok())
        .collect();

    let low = values.iter().copied().min()?;
    let high = values.iter().copied().max()?;
    Some((low, high))
}

/// Keeps jobs whose salary overlaps `range`. An unbounded range keeps everything.
pub fn filter_by_salary(jobs: Vec<Job>, range: SalaryRange) -> Vec<Job> {
    if range.is_unbounded() {
        return jobs;
    }

    let before = jobs.len();
    let kept: Vec<Job> = jobs.into_iter().filter(|job| range.admits(job)).collect();
    tracing::info!(
        before,
        after = kept.len(),
        min = ?range.min,
        max = ?range.max,
        "After salary filtering"
    );
    kept
}
