use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm_client::strip_json_fences;
use crate::models::CandidateFields;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Parses a raw service reply into candidate fields.
///
/// The reply may be wrapped in a fenced code block. Missing keys and JSON
/// `null` map to `None`; numbers and booleans are kept as their JSON text so a
/// phone number returned unquoted is not lost.
pub fn parse_candidate_fields(raw: &str) -> Result<CandidateFields, ResponseError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))?;
    let object = match value {
        Value::Object(map) => map,
        other => return Err(ResponseError::NotAnObject(json_type(&other))),
    };

    Ok(CandidateFields {
        name: field_text(&object, "name"),
        email: field_text(&object, "email"),
        phone: field_text(&object, "phone"),
        location: field_text(&object, "location"),
        job_title_guess: field_text(&object, "job_title_guess"),
    })
}

fn field_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
