//! Profile Error Types
//!
//! This module provides profile-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Profile-specific error variants
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Name is empty, too long, or uses characters outside `[a-z0-9 _-]`
    #[error("Invalid profile name")]
    InvalidName,

    /// Body declared as JSON but not parseable
    #[error("Invalid JSON body")]
    InvalidBody,

    /// No profile with that name for this user
    #[error("Not found")]
    NotFound,

    /// Stored blob failed authentication or did not decode to a profile
    #[error("Decryption error")]
    DecryptionError,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::InvalidName | ProfileError::InvalidBody => StatusCode::BAD_REQUEST,
            ProfileError::NotFound => StatusCode::NOT_FOUND,
            ProfileError::DecryptionError
            | ProfileError::Database(_)
            | ProfileError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::InvalidName | ProfileError::InvalidBody => ErrorKind::BadRequest,
            ProfileError::NotFound => ErrorKind::NotFound,
            ProfileError::DecryptionError => ErrorKind::IntegrityFailure,
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Message safe to return to clients
    fn public_message(&self) -> String {
        match self {
            ProfileError::Database(_) | ProfileError::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            ProfileError::DecryptionError => {
                tracing::error!("Stored profile failed integrity check");
            }
            _ => {
                tracing::debug!(error = %self, "Profile error");
            }
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        AppError::new(err.kind(), err.public_message())
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
