//! Response shape errors
//!
//! A body that decoded as JSON but does not look like what the review API
//! promises. Raised both when validating the envelope and when reading a
//! single record out of it.

use thiserror::Error;

/// Well-formed but semantically invalid response data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The decoded body is not a JSON object
    #[error("response is not a JSON object (got {0})")]
    NotAnObject(&'static str),

    /// A required key is absent
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A key holds a value of the wrong JSON type
    #[error("field `{field}` must be {expected}, got {actual}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The status code is not one the catalog knows how to describe
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

/// Human-readable JSON type name, used in shape error messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
