//! Custom error types for the administration service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the administration service
///
/// "Not found" is the only failure the API surfaces; repositories report
/// absence through `Option`/`bool` results and handlers translate those
/// into this error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested entity does not exist
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
