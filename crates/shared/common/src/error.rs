//! Unified error handling for the HTTP surface.
//!
//! Every layer returns `AppResult<T>`; the gateway renders an `AppError`
//! as `{"error": {"code", "message"}}` with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Invalid email or password")]
    Unauthorized,

    #[error("Authentication required")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    // Registration conflicts
    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already exists")]
    DuplicateEmail,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
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
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::MissingToken => "AUTH_REQUIRED",
            AppError::InvalidToken => "INVALID_TOKEN",
            AppError::DuplicateUsername => "DUPLICATE_USERNAME",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::MissingToken | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::DuplicateUsername | AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal/security errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

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

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => AppError::Validation(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
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
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::DuplicateUsername.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_error_conversion() {
        assert!(matches!(
            AppError::from(DomainError::password("too short")),
            AppError::Validation(msg) if msg == "too short"
        ));
        assert!(matches!(
            AppError::from(DomainError::internal("hash failed")),
            AppError::Internal(msg) if msg == "hash failed"
        ));
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let (status, json) = body_json(AppError::DuplicateEmail).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
        assert_eq!(json["error"]["message"], "Email already exists");
    }

    #[tokio::test]
    async fn test_internal_details_hidden() {
        let (_, json) = body_json(AppError::internal("connection string leaked")).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }
}
