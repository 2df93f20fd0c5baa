pub mod error;
pub mod form;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use form::form_errors::FormErrors;
pub use form::project_request_form::{ProjectRequestForm, validate_form};
pub use models::category::KNOWN_CATEGORIES;
pub use models::deadline::{deadline_from_millis, parse_deadline};
pub use models::new_project_request::NewProjectRequest;
pub use models::project_request::ProjectRequest;
