pub mod form_errors;
pub mod project_request_form;
