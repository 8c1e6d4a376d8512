//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types.
///
/// The `Display` string of each variant is the exact plain-text body sent
/// to the client, so the wire messages live in one place.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Request body could not be decoded as the expected JSON shape.
    #[error("Invalid input")]
    MalformedBody,

    /// A required field was absent or empty on create.
    #[error("Missing required fields")]
    MissingField,

    /// Email does not match the `local@domain.tld` pattern.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Path identifier segment was not an integer.
    #[error("Invalid user ID")]
    InvalidIdentifier,

    /// Another record already holds this username.
    #[error("Username already exists")]
    DuplicateUsername,

    /// Another record already holds this email.
    #[error("Email already exists")]
    DuplicateEmail,

    /// No record with the requested identifier.
    #[error("User not found")]
    NotFound,

    /// Known path hit with the wrong HTTP verb.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Anything that should never surface to a client verbatim.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody
            | AppError::MissingField
            | AppError::InvalidEmail
            | AppError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            AppError::DuplicateUsername | AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Clients match these bodies verbatim, so they stay plain text.
        (self.status(), self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
