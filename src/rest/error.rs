//! Domain → transport error translation.
//!
//! The REST layer is the only place domain errors become status codes.
//! Everything serializes to the `{error, code}` envelope; internal
//! errors are logged server-side and surface only a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::store::error::TaskError;

#[derive(Debug)]
pub enum ApiError {
    /// Request carried no usable body (create/update require one).
    MissingBody,
    /// Body was present but could not be parsed into a task payload.
    MalformedBody(String),
    /// Error raised by the task store.
    Domain(TaskError),
    /// A programming fault — a handler panic caught by the router's
    /// catch-panic layer. Detail is logged, never returned to the caller.
    Internal(anyhow::Error),
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            ApiError::MissingBody => (
                StatusCode::BAD_REQUEST,
                "Request body is required".to_string(),
                "MISSING_BODY",
            ),
            ApiError::MalformedBody(detail) => {
                (StatusCode::BAD_REQUEST, detail, "VALIDATION_ERROR")
            }
            ApiError::Domain(err) => {
                let status = match err {
                    TaskError::NotFound(_) => StatusCode::NOT_FOUND,
                    TaskError::Validation { .. } => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string(), err.code())
            }
            ApiError::Internal(err) => {
                error!(error = %err, "unexpected error handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };
        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}
