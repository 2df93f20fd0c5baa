pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_context;
pub mod request_logging;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    project_requests::{
        project_requests::submit_project_request,
        submission::{MAX_SUBMISSION_BYTES, SUBMISSION_SUCCESS_MESSAGE, parse_submission},
        submission_response::SubmissionResponse,
    },
};
pub use app_state::AppState;
pub use request_context::RequestContext;

pub use crate::routes::build_router;
