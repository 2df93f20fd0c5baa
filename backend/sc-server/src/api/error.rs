//! REST API error types
//!
//! Malformed or oversized bodies, invalid fields and store failures are
//! distinct variants with distinct status codes. Every variant renders as
//! `{"error": <message>, "code": <CODE>, "field"?: <name>}`.

use crate::MAX_SUBMISSION_BYTES;

use sc_core::CoreError;
use sc_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients when the store cannot be used
pub const STORAGE_UNAVAILABLE_MESSAGE: &str = "Project request storage is unavailable";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// First offending field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not a JSON object (400)
    #[error("Malformed body: {message} {location}")]
    MalformedBody {
        message: String,
        location: ErrorLocation,
    },

    /// Body larger than the route's limit (413)
    #[error("Payload too large: body exceeds {limit} bytes {location}")]
    PayloadTooLarge {
        limit: usize,
        location: ErrorLocation,
    },

    /// Missing, empty or uncastable field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Store unreachable or write rejected (503).
    ///
    /// `detail` is logged when the response is built; only `message` reaches
    /// the client.
    #[error("Storage unavailable: {message} {location}")]
    StorageUnavailable {
        message: String,
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody { .. } | ApiError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::StorageUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client errors are already reported by the handler exit line
        match &self {
            ApiError::StorageUnavailable { detail, .. } => log::error!("{} ({})", self, detail),
            _ => log::debug!("{}", self),
        }

        let status = self.status_code();
        let body = match self {
            ApiError::MalformedBody { message, .. } => ApiErrorResponse {
                error: message,
                code: "MALFORMED_BODY".into(),
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorResponse {
                error: message,
                code: "VALIDATION_ERROR".into(),
                field,
            },
            ApiError::PayloadTooLarge { limit, .. } => ApiErrorResponse {
                error: format!("Request body must not exceed {} bytes", limit),
                code: "PAYLOAD_TOO_LARGE".into(),
                field: None,
            },
            ApiError::StorageUnavailable { message, .. } => ApiErrorResponse {
                error: message,
                code: "STORAGE_UNAVAILABLE".into(),
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert record validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidDeadline { value, .. } => ApiError::Validation {
                message: format!("deadline must be a valid date, got {:?}", value),
                field: Some("deadline".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Validation { source } => ApiError::from(source),
            other => ApiError::StorageUnavailable {
                message: STORAGE_UNAVAILABLE_MESSAGE.to_string(),
                detail: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert body extraction failures to API errors
impl From<BytesRejection> for ApiError {
    #[track_caller]
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                limit: MAX_SUBMISSION_BYTES,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::MalformedBody {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
