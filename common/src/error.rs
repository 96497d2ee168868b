use serde_json::Value;
use thiserror::Error;

/// A raw row that could not be turned into a job.
#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("Record is not an object (found {0})")]
    NotAnObject(&'static str),

    #[error("Field `{field}` has unsupported type {found}")]
    UnsupportedType {
        field: &'static str,
        found: &'static str,
    },

    #[error("Field `{field}` is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
