//! Request form validation schema.
//!
//! Runs on the client before a request is sent. The submission endpoint does
//! not re-apply these rules and must treat every field as untrusted.

use crate::FormErrors;

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Values entered into the project request form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 10, message = "Please enter a valid phone number."))]
    pub phone: String,

    #[validate(length(min = 3, message = "Project name must be at least 3 characters."))]
    pub project_name: String,

    #[validate(length(min = 1, message = "Please select a category."))]
    pub category: String,

    #[validate(length(min = 20, message = "Description must be at least 20 characters."))]
    pub description: String,

    /// Calendar date, `YYYY-MM-DD`
    #[validate(custom(function = "validate_deadline"))]
    pub deadline: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl ProjectRequestForm {
    /// Run every rule and collect the failures per field.
    pub fn errors(&self) -> FormErrors {
        match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(errors) => FormErrors::from(errors),
        }
    }

    /// The form may be sent only when no field reports an error.
    pub fn is_submittable(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Validate a form, returning per-field errors (empty when valid).
pub fn validate_form(form: &ProjectRequestForm) -> FormErrors {
    form.errors()
}

fn validate_deadline(deadline: &str) -> Result<(), ValidationError> {
    if deadline.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Please select a deadline.")));
    }

    NaiveDate::parse_from_str(deadline.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("date")
                .with_message(Cow::Borrowed("Deadline must be a date (YYYY-MM-DD)."))
        })
}
