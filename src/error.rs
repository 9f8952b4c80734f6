use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::store::StoreError;

/// Helper to create a JSON error response with a standard `{ "error": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

/// Request-level errors, mapped onto HTTP responses.
///
/// Absent ids are never errors: `get_by_id` returning `None` and
/// `update`/`delete` affecting zero rows flow through the success path.
pub enum AppError {
    /// A required form field was not submitted — 400.
    MissingField(&'static str),
    /// A form field was submitted but could not be parsed — 400.
    BadRequest(String),
    /// A typed path segment did not parse as a non-negative integer — 404.
    InvalidPath(String),
    /// The store failed (connectivity or constraint) — 500.
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {field}"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InvalidPath(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        error_response(status, message)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingField(field) => write!(f, "Missing required field: {field}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::InvalidPath(msg) => write!(f, "Not Found: {msg}"),
            AppError::Store(err) => write!(f, "Store error: {err}"),
        }
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
