//! API error handling
//!
//! Registry errors map onto HTTP statuses by category alone, so no handler
//! ever inspects an error message.

use std::error::Error as _;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::CoreError;
use domain_customer::{CustomerError, ErrorKind, FieldError, RegistryError};

const BAD_REQUEST: &str = "BAD_REQUEST";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorKind::NotFound.as_str(), msg, None)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, BAD_REQUEST, msg, None),
            ApiError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorKind::ExpectedConflict.as_str(), msg, None)
            }
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::ValidationFailed.as_str(),
                message,
                Some(details),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::Unexpected.as_str(),
                msg,
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            ErrorKind::ExpectedConflict => ApiError::Conflict(err.to_string()),
            ErrorKind::ValidationFailed => {
                let details = err
                    .validation_errors()
                    .map(|errors| errors.errors().to_vec())
                    .unwrap_or_default();
                ApiError::Validation {
                    message: err.to_string(),
                    details,
                }
            }
            ErrorKind::Unexpected => {
                error!(
                    operation = err.operation(),
                    cause = ?err.source().map(|s| s.to_string()),
                    "Unexpected registry failure"
                );
                ApiError::Internal("internal error".to_string())
            }
        }
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
