//! Unified error types for the data service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for service startup and operation.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Client input validation errors.
///
/// The only error taxonomy the API surfaces: every variant maps to an
/// HTTP 400 with a `{"error": <message>}` body. Malformed request bodies
/// take the same paths as missing fields.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// User payload missing, or missing/null `name` or `email`.
    #[error("Invalid user data")]
    InvalidUserData,

    /// Process-data payload missing or without a `values` key.
    #[error("No values provided")]
    NoValuesProvided,

    /// `values` is not a list, or contains a non-numeric element.
    #[error("Values must be a list of numbers")]
    NotNumberList,
}

/// JSON body for validation failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        crate::metrics::record_validation_failure();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
