//! A project request that has not been stored yet.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fields supplied by the customer. `id` and timestamps are assigned on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_name: String,
    pub category: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl NewProjectRequest {
    /// Check that every required text field is non-empty.
    ///
    /// All offending fields are named in the message; `field` carries the first.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("projectName", &self.project_name),
            ("category", &self.category),
            ("description", &self.description),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(CoreError::Validation {
            message: format!(
                "ProjectRequest validation failed: {}",
                missing
                    .iter()
                    .map(|field| format!("{field} is required"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            field: missing.first().map(|field| field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
