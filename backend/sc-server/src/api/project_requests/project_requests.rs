//! Project request submission handler

use crate::request_logging::{log_entry, log_exit};
use crate::{
    ApiError, ApiResult, AppState, RequestContext, SUBMISSION_SUCCESS_MESSAGE, SubmissionResponse,
    parse_submission,
};

use sc_db::ProjectRequestRepository;

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use log::info;

const HANDLER: &str = "submit_project_request";

/// POST /api/project-request
///
/// Takes the raw body; `parse_submission` owns deserialization.
pub async fn submit_project_request(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<SubmissionResponse>)> {
    let ctx = RequestContext::new();
    log_entry(&ctx, HANDLER);

    let result = match body {
        Ok(body) => submit(&state, &ctx, &body).await,
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    log_exit(&ctx, HANDLER, &result);
    result
}

async fn submit(
    state: &AppState,
    ctx: &RequestContext,
    body: &[u8],
) -> ApiResult<(StatusCode, Json<SubmissionResponse>)> {
    let request = parse_submission(body)?;

    let pool = state.gateway.pool().await?;
    let record = ProjectRequestRepository::new(pool.clone())
        .create(request)
        .await?;

    info!(
        "{} Stored project request {} ({})",
        ctx.log_prefix(),
        record.id,
        record.category
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            message: SUBMISSION_SUCCESS_MESSAGE.to_string(),
        }),
    ))
}
