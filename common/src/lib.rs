//! Shared job model and normalization pipeline.
//!
//! Scraped rows arrive loosely typed and vary per job board. Everything in
//! this crate is pure: raw rows become [`RawRecord`]s, records become
//! canonical [`Job`]s, and the salary filter trims the batch before it is
//! wrapped in a [`ScrapeResponse`].

pub mod error;
pub mod filter;
pub mod job;
pub mod mapper;
pub mod raw;
pub mod request;
pub mod salary;

pub use error::MappingError;
pub use filter::{SalaryRange, filter_by_salary, parse_salary_bounds};
pub use job::{Job, ScrapeResponse};
pub use mapper::{job_id, map_record, map_records};
pub use raw::RawRecord;
pub use request::{Country, DescriptionFormat, JobType, ScrapeParams, ScrapeRequest, split_sites};
pub use salary::{PayInterval, annualize_thousands, format_salary, normalize_salary};
