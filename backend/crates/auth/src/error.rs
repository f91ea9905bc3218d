//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorization header present but not a usable bearer credential
    #[error("Malformed Authorization header: {0}")]
    MalformedHeader(#[from] platform::bearer::BearerError),

    /// Token expired
    #[error("Token has expired")]
    TokenExpired,

    /// Signature, issuer, audience or shape check failed
    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    /// User not found in the directory
    #[error("User not found")]
    UserNotFound,

    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Configuration error (e.g. missing signing secret)
    #[error("Auth configuration error: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MalformedHeader(_)
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::Database(e) => classify_sqlx_error(e).0,
            AuthError::Config(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = match self {
            AuthError::Database(e) => AppError::new(self.kind(), classify_sqlx_error(e).1),
            _ => AppError::new(self.kind(), self.to_string()),
        };
        match self {
            AuthError::TokenExpired => err.with_action("Request a new bearer token"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Config(msg) | AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::TokenInvalid(reason) => {
                tracing::warn!(reason = %reason, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind as JwtKind;
        match err.kind() {
            JwtKind::ExpiredSignature => AuthError::TokenExpired,
            JwtKind::InvalidSignature => AuthError::TokenInvalid("bad signature".into()),
            JwtKind::InvalidIssuer => AuthError::TokenInvalid("issuer mismatch".into()),
            JwtKind::InvalidAudience => AuthError::TokenInvalid("audience mismatch".into()),
            JwtKind::ImmatureSignature => AuthError::TokenInvalid("not yet valid".into()),
            JwtKind::InvalidToken | JwtKind::Base64(_) | JwtKind::Json(_) | JwtKind::Utf8(_) => {
                AuthError::TokenInvalid("malformed token".into())
            }
            JwtKind::MissingRequiredClaim(claim) => {
                AuthError::TokenInvalid(format!("missing claim `{claim}`"))
            }
            _ => AuthError::TokenInvalid(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (
                AuthError::TokenInvalid("bad signature".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::MalformedHeader(platform::bearer::BearerError::WrongScheme),
                StatusCode::UNAUTHORIZED,
            ),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (AuthError::UserNameTaken, StatusCode::CONFLICT),
            (
                AuthError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AuthError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_expired_token_carries_action() {
        let app = AuthError::TokenExpired.to_app_error();
        assert!(app.action().is_some());
    }
}
