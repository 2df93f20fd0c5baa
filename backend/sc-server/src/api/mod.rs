pub mod error;
pub mod project_requests;
