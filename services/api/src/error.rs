//! Custom error types for the reminder API

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::service::ServiceError;

/// Custom error type for the reminder API
#[derive(Error, Debug)]
pub enum ApiError {
    /// No verifiable identity on the request
    #[error("Unauthorized")]
    Unauthorized,

    /// Caller lacks every role the route accepts
    #[error("Forbidden")]
    Forbidden,

    /// Missing entity or empty collection
    #[error("Not found")]
    NotFound,

    /// Failure surfaced by the reminder service
    #[error("Reminder service error: {0}")]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::Service(e) => {
                error!("Reminder service failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
