//! CMS Error Types
//!
//! This module provides content-domain error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx_error;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{ArticleId, CommentId};
use thiserror::Error;

/// CMS-specific result type alias
pub type CmsResult<T> = Result<T, CmsError>;

/// CMS-specific error variants
#[derive(Debug, Error)]
pub enum CmsError {
    /// Action needs a caller but the request carried no verified token
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated caller is not allowed to perform the action
    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    #[error("Article {0} not found")]
    ArticleNotFound(ArticleId),

    #[error("Comment {0} not found")]
    CommentNotFound(CommentId),

    /// Malformed request body, path or query
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CmsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CmsError::Unauthenticated => ErrorKind::Unauthorized,
            CmsError::Forbidden(_) => ErrorKind::Forbidden,
            CmsError::ArticleNotFound(_) | CmsError::CommentNotFound(_) => ErrorKind::NotFound,
            CmsError::InvalidInput(_) => ErrorKind::BadRequest,
            CmsError::Database(e) => classify_sqlx_error(e).0,
            CmsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CmsError::Unauthenticated => AppError::unauthorized(self.to_string())
                .with_action("Send an Authorization: Bearer <token> header"),
            CmsError::Database(e) => AppError::new(self.kind(), classify_sqlx_error(e).1),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CmsError::Database(e) => {
                tracing::error!(error = %e, "CMS database error");
            }
            CmsError::Internal(msg) => {
                tracing::error!(message = %msg, "CMS internal error");
            }
            CmsError::Forbidden(reason) => {
                tracing::warn!(reason = %reason, "CMS action denied");
            }
            _ => {
                tracing::debug!(error = %self, "CMS error");
            }
        }
    }
}

impl From<CmsError> for AppError {
    fn from(err: CmsError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CmsError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.to_app_error().into_response();
        if matches!(self, CmsError::Unauthenticated) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
