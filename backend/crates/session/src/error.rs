//! Session Error Types
//!
//! Session-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use certificate::CertificateError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Wrong staff username or password
    #[error("Invalid staff credentials")]
    InvalidCredentials,

    /// Action needs an elevated session
    #[error("Staff sign-in required")]
    StaffOnly,

    /// Confirm/cancel without an open delete confirmation
    #[error("No deletion is awaiting confirmation")]
    NothingToConfirm,

    /// The confirmed deletion failed; the confirmation stays open
    #[error(transparent)]
    Delete(#[from] CertificateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials | Self::StaffOnly => ErrorKind::Unauthorized,
            Self::NothingToConfirm => ErrorKind::Conflict,
            Self::Delete(inner) => inner.kind(),
            Self::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            Self::Delete(inner) => inner.to_app_error(),
            Self::StaffOnly => AppError::new(self.kind(), self.to_string())
                .with_action("Sign in from the staff menu"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            Self::InvalidCredentials => tracing::warn!("Invalid staff login attempt"),
            Self::Delete(inner) => tracing::error!(error = %inner, "Confirmed deletion failed"),
            Self::Internal(msg) => tracing::error!(message = %msg, "Session internal error"),
            _ => tracing::debug!(error = %self, "Session error"),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certificate::domain::{RequestId, StoreAction, StoreError};

    #[test]
    fn test_kinds() {
        assert_eq!(SessionError::InvalidCredentials.kind(), ErrorKind::Unauthorized);
        assert_eq!(SessionError::NothingToConfirm.kind(), ErrorKind::Conflict);
        assert_eq!(
            SessionError::StaffOnly.to_app_error().action(),
            Some("Sign in from the staff menu")
        );
    }

    #[test]
    fn test_delete_failure_keeps_store_classification() {
        let err = SessionError::from(CertificateError::store(StoreAction::Delete)(
            StoreError::Status(500),
        ));
        assert_eq!(err.kind(), ErrorKind::BadGateway);
        assert_eq!(err.to_string(), "Could not delete the request in the spreadsheet");

        let gone = SessionError::from(CertificateError::RequestNotFound(RequestId::new(3)));
        assert_eq!(gone.kind(), ErrorKind::NotFound);
    }
}
