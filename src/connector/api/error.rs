use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::domain::{DomainError, ValidationError};

/// Body sent when the email has nothing before its domain suffix.
///
/// Kept byte-for-byte as existing clients expect it, malformed key included.
pub const EMPTY_LOCAL_PART_BODY: &str = r#"{"Error:mail cannot be empty"}"#;

/// Why a `/users` request was rejected.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("path has no id segment")]
    BadPath,

    #[error("Invalid ID")]
    InvalidId,

    #[error("Invalid Body")]
    InvalidBody,

    #[error("unsupported method {0}")]
    UnsupportedMethod(Method),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if !matches!(self, ApiError::Domain(DomainError::NotFound(_))) {
            warn!("Rejected request: {}", self);
        }

        match self {
            ApiError::BadPath | ApiError::UnsupportedMethod(_) => {
                empty_response(StatusCode::BAD_REQUEST)
            }
            ApiError::InvalidId => error_response(StatusCode::BAD_REQUEST, "Invalid ID"),
            ApiError::InvalidBody => error_response(StatusCode::BAD_REQUEST, "Invalid Body"),
            ApiError::Domain(DomainError::NotFound(_)) => empty_response(StatusCode::NOT_FOUND),
            ApiError::Domain(DomainError::Validation(ValidationError::EmptyLocalPart)) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                EMPTY_LOCAL_PART_BODY,
            )
                .into_response(),
            ApiError::Domain(DomainError::Validation(reason)) => {
                error_response(StatusCode::BAD_REQUEST, &reason.to_string())
            }
        }
    }
}

/// A JSON content type with no body.
pub fn empty_response(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")]).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "Error": message }))).into_response()
}
