//! Certificate Error Types
//!
//! Certificate-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::entity::submission::ValidationError;
use crate::domain::store::{StoreAction, StoreError};
use crate::domain::value_object::{request_id::RequestId, request_status::RequestStatus};

/// Certificate-specific result type alias
pub type CertificateResult<T> = Result<T, CertificateError>;

#[derive(Debug, Error)]
pub enum CertificateError {
    /// Form input refused before any remote call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request #{0} not found")]
    RequestNotFound(RequestId),

    #[error("No requests found for {0}")]
    RequesterNotFound(String),

    /// Pickup signature before the document came back
    #[error("Request #{id} is still at \"{status}\"; it can be signed for once it has been returned")]
    ReceiptNotAllowed { id: RequestId, status: RequestStatus },

    #[error("Signer name is required")]
    MissingSigner,

    #[error("Could not {} in the spreadsheet", .action.describe())]
    Store {
        action: StoreAction,
        #[source]
        source: StoreError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CertificateError {
    pub fn store(action: StoreAction) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { action, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::MissingSigner => ErrorKind::UnprocessableEntity,
            Self::RequestNotFound(_) | Self::RequesterNotFound(_) => ErrorKind::NotFound,
            Self::ReceiptNotAllowed { .. } => ErrorKind::Conflict,
            Self::Store {
                source: StoreError::UnknownRequest(_),
                ..
            } => ErrorKind::NotFound,
            Self::Store { source, .. } if source.is_timeout() => ErrorKind::GatewayTimeout,
            Self::Store { .. } => ErrorKind::BadGateway,
            Self::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let error = AppError::new(self.kind(), self.to_string());
        match self {
            Self::Store { .. } => error.with_action("Please try again later"),
            Self::ReceiptNotAllowed { .. } => {
                error.with_action("Wait until the document is back from the division")
            }
            _ => error,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            Self::Store { action, source } => {
                tracing::error!(
                    action = action.wire_name(),
                    error = %source,
                    "Remote store call failed"
                );
            }
            Self::Internal(msg) => {
                tracing::error!(message = %msg, "Certificate internal error");
            }
            Self::ReceiptNotAllowed { id, status } => {
                tracing::warn!(id = %id, status = status.code(), "Receipt refused");
            }
            _ => {
                tracing::debug!(error = %self, "Certificate error");
            }
        }
    }
}

impl IntoResponse for CertificateError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
