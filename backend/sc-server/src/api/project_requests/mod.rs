#[allow(clippy::module_inception)]
pub mod project_requests;
pub mod submission;
pub mod submission_response;
