//! Centralized error handling.
//!
//! Component errors (hashing, signing, user store) are folded into one
//! application error type with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Credential hashing failures
#[derive(Error, Debug)]
pub enum HashingError {
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    #[error("Password hash failed: {0}")]
    Backend(String),
}

/// Token signing and verification failures
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Token expiry of {0}s is out of range")]
    InvalidExpiry(i64),

    #[error("Token signing failed")]
    Encoding(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Failures raised by a user store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} already exists")]
    Conflict(String),

    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Password hashing failed")]
    Hashing(#[from] HashingError),

    #[error("User could not be persisted")]
    Persistence(#[from] StoreError),

    #[error("Token issuance failed")]
    Signing(#[from] SigningError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Hashing(_) => "HASHING_ERROR",
            AppError::Persistence(StoreError::Conflict(_)) => "CONFLICT",
            AppError::Persistence(StoreError::Unavailable(_)) => "PERSISTENCE_ERROR",
            AppError::Signing(_) => "SIGNING_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Persistence(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Hashing(_)
            | AppError::Persistence(StoreError::Unavailable(_))
            | AppError::Signing(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Persistence(e @ StoreError::Conflict(_)) => e.to_string(),

            AppError::Hashing(e) => {
                tracing::error!("Hashing error: {}", e);
                "Password could not be processed".to_string()
            }
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {}", e);
                "User could not be created".to_string()
            }
            AppError::Signing(e) => {
                tracing::error!("Signing error: {:?}", e);
                "Session token could not be issued".to_string()
            }
            AppError::Config(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(StoreError::Conflict("User".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(StoreError::Unavailable("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(HashingError::Backend("oom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(SigningError::MissingSecret).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(
            AppError::from(StoreError::Conflict("User".into())).code(),
            "CONFLICT"
        );
        assert_eq!(
            AppError::from(SigningError::MissingSecret).code(),
            "SIGNING_ERROR"
        );
    }

    #[test]
    fn test_internal_details_hidden() {
        let message = AppError::from(HashingError::Backend("salt rng exhausted".into())).user_message();
        assert!(!message.contains("salt"));

        let message = AppError::from(StoreError::Conflict("User".into())).user_message();
        assert_eq!(message, "User already exists");
    }
}
