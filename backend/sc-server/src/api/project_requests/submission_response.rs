use serde::Serialize;

/// Body of a successful submission. No identifier is returned.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
}
