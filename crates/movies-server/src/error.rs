//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type for the movie endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.
//!
//! Missing records are not errors at this layer: handlers answer them with a
//! 200 message (see [`crate::schema::movies::NOT_FOUND`]).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body could not be decoded (400).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn detail(&self) -> ApiErrorDetail {
        match self {
            ApiError::BadRequest(msg) => ApiErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message: msg.clone(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "error": self.detail(),
        });

        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<movies_core::CoreError> for ApiError {
    fn from(err: movies_core::CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
