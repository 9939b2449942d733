//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Internal details never reach the response body.

use nr_auth::ServiceError;
use nr_core::{MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARACTERS};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Email already taken (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert service errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ServiceError::Conflict { .. } => ApiError::Conflict {
                message: "Email already registered".to_string(),
                location,
            },
            ServiceError::InvalidEmail { .. } => ApiError::Validation {
                message: "Invalid parameters. Email must contain '@' and a valid domain"
                    .to_string(),
                field: Some("email".to_string()),
                location,
            },
            ServiceError::InvalidPassword { .. } => ApiError::Validation {
                message: format!(
                    "Invalid parameters. Password must be at least {} characters and include \
                     an uppercase letter, a lowercase letter, a digit and one of {}",
                    MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARACTERS
                ),
                field: Some("password".to_string()),
                location,
            },
            ServiceError::InvalidName { field, .. } => ApiError::Validation {
                message: format!("Invalid parameters. {} must not be empty", field),
                field: Some(field.to_string()),
                location,
            },
            ServiceError::NotFound { id, .. } => ApiError::NotFound {
                message: format!("Nurse not found with id {}", id),
                location,
            },
            ServiceError::NameNotFound { name, .. } => ApiError::NotFound {
                message: format!("Nurse not found with name {}", name),
                location,
            },
            // Don't expose storage or hashing details to clients
            other @ (ServiceError::StoreUnavailable { .. } | ServiceError::Hashing { .. }) => {
                log::error!("Service failure: {}", other);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
