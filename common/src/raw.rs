use chrono::DateTime;
use serde_json::{Map, Value};

use crate::error::{MappingError, kind_of};
use crate::salary::PayInterval;

/// Missing-value markers the scraping backend leaks as plain text.
const MISSING_SENTINELS: [&str; 2] = ["nan", "nat"];

/// One scraped listing with every field explicitly present or missing.
///
/// A field is missing when the key is absent, null, blank, or one of the
/// `nan` / `NaT` markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub date_posted: Option<String>,
    pub description: Option<String>,
    pub job_url: Option<String>,
    pub site: Option<String>,
    pub job_type: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub interval: Option<PayInterval>,
}

impl RawRecord {
    pub fn from_value(value: Value) -> Result<Self, MappingError> {
        let Value::Object(row) = value else {
            return Err(MappingError::NotAnObject(kind_of(&value)));
        };

        Ok(Self {
            title: text(&row, "title")?,
            company: text(&row, "company")?,
            location: text(&row, "location")?,
            date_posted: date(&row, "date_posted")?,
            description: text(&row, "description")?,
            job_url: text(&row, "job_url")?,
            site: text(&row, "site")?,
            job_type: text(&row, "job_type")?,
            min_amount: amount(&row, "min_amount")?,
            max_amount: amount(&row, "max_amount")?,
            interval: text(&row, "interval")?.map(|interval| PayInterval::parse(&interval)),
        })
    }
}

fn present(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let is_sentinel = MISSING_SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel));

    if trimmed.is_empty() || is_sentinel {
        None
    } else {
        Some(raw.to_string())
    }
}

fn text(row: &Map<String, Value>, field: &'static str) -> Result<Option<String>, MappingError> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(present(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(MappingError::UnsupportedType {
            field,
            found: kind_of(other),
        }),
    }
}

fn amount(row: &Map<String, Value>, field: &'static str) -> Result<Option<f64>, MappingError> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64().filter(|f| f.is_finite())),
        Some(Value::String(s)) => {
            let Some(s) = present(s) else {
                return Ok(None);
            };
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            cleaned
                .parse::<f64>()
                .map(|f| Some(f).filter(|f| f.is_finite()))
                .map_err(|_| MappingError::NotNumeric { field, value: s })
        }
        Some(other) => Err(MappingError::UnsupportedType {
            field,
            found: kind_of(other),
        }),
    }
}

/// Dates arrive either as text or as epoch milliseconds.
fn date(row: &Map<String, Value>, field: &'static str) -> Result<Option<String>, MappingError> {
    match row.get(field) {
        Some(Value::Number(n)) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64));
            Ok(millis
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string()))
        }
        _ => text(row, field),
    }
}
