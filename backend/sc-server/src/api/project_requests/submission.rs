//! Schema-validated deserialization of a submission body.
//!
//! The body is untrusted: client-side form rules may not have run. Values are
//! cast the way a document schema casts them. Numbers and booleans become
//! strings, `null` counts as missing, and arrays or objects are rejected.
//! Unknown fields are ignored.

use crate::{ApiError, ApiResult};

use sc_core::{NewProjectRequest, deadline_from_millis, parse_deadline};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde_json::{Map, Value};

pub const SUBMISSION_SUCCESS_MESSAGE: &str = "Project request submitted successfully!";

/// Largest accepted submission body
pub const MAX_SUBMISSION_BYTES: usize = 64 * 1024;

/// Parse and validate a raw request body into a new project request.
#[track_caller]
pub fn parse_submission(body: &[u8]) -> ApiResult<NewProjectRequest> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody {
        message: format!("Request body is not valid JSON: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let Value::Object(fields) = value else {
        return Err(ApiError::MalformedBody {
            message: "Request body must be a JSON object".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let mut reader = FieldReader::new(&fields);

    let request = NewProjectRequest {
        name: reader.required_text("name"),
        email: reader.required_text("email"),
        phone: reader.required_text("phone"),
        project_name: reader.required_text("projectName"),
        category: reader.required_text("category"),
        description: reader.required_text("description"),
        deadline: reader.deadline("deadline"),
        budget: reader.optional_text("budget"),
    };

    reader.finish()?;

    Ok(request)
}

struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    /// (field, reason) in the order fields were read
    problems: Vec<(&'static str, &'static str)>,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            problems: Vec::new(),
        }
    }

    /// Returns an empty string when the field is unusable; `finish` reports it.
    fn required_text(&mut self, field: &'static str) -> String {
        let fields = self.fields;
        match fields.get(field).map(cast_text) {
            None | Some(Cast::Missing) => self.reject(field, "is required", String::new()),
            Some(Cast::Invalid) => self.reject(field, "must be a string", String::new()),
            Some(Cast::Value(text)) if text.trim().is_empty() => {
                self.reject(field, "is required", String::new())
            }
            Some(Cast::Value(text)) => text,
        }
    }

    fn optional_text(&mut self, field: &'static str) -> Option<String> {
        let fields = self.fields;
        match fields.get(field).map(cast_text) {
            None | Some(Cast::Missing) => None,
            Some(Cast::Invalid) => self.reject(field, "must be a string", None),
            Some(Cast::Value(text)) if text.trim().is_empty() => None,
            Some(Cast::Value(text)) => Some(text),
        }
    }

    fn deadline(&mut self, field: &'static str) -> DateTime<Utc> {
        let fields = self.fields;
        let parsed = match fields.get(field) {
            None | Some(Value::Null) => {
                return self.reject(field, "is required", DateTime::<Utc>::UNIX_EPOCH);
            }
            Some(Value::String(text)) if text.trim().is_empty() => {
                return self.reject(field, "is required", DateTime::<Utc>::UNIX_EPOCH);
            }
            Some(Value::String(text)) => parse_deadline(text).ok(),
            Some(Value::Number(number)) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|millis| millis as i64))
                .and_then(|millis| deadline_from_millis(millis).ok()),
            Some(_) => None,
        };

        match parsed {
            Some(deadline) => deadline,
            None => self.reject(field, "must be a valid date", DateTime::<Utc>::UNIX_EPOCH),
        }
    }

    fn reject<T>(&mut self, field: &'static str, reason: &'static str, placeholder: T) -> T {
        self.problems.push((field, reason));
        placeholder
    }

    #[track_caller]
    fn finish(self) -> ApiResult<()> {
        let Some((first, _)) = self.problems.first() else {
            return Ok(());
        };

        Err(ApiError::Validation {
            message: format!(
                "ProjectRequest validation failed: {}",
                self.problems
                    .iter()
                    .map(|(field, reason)| format!("{} {}", field, reason))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            field: Some(first.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

enum Cast {
    Missing,
    Invalid,
    Value(String),
}

fn cast_text(value: &Value) -> Cast {
    match value {
        Value::Null => Cast::Missing,
        Value::String(text) => Cast::Value(text.clone()),
        Value::Number(number) => Cast::Value(number.to_string()),
        Value::Bool(flag) => Cast::Value(flag.to_string()),
        Value::Array(_) | Value::Object(_) => Cast::Invalid,
    }
}
