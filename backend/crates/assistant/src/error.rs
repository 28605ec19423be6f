//! Assistant Error Types
//!
//! Backend failures never reach the caller as errors; the chat use case turns
//! them into an apology. Only a blank message is rejected.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AssistantResult<T> = Result<T, AssistantError>;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Assistant is not configured")]
    NotConfigured,

    #[error("Assistant backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Assistant backend returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Unreadable assistant reply: {0}")]
    Decode(String),
}

impl AssistantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyMessage => ErrorKind::UnprocessableEntity,
            Self::NotConfigured => ErrorKind::InternalServerError,
            Self::Transport(e) if e.is_timeout() => ErrorKind::GatewayTimeout,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_) => ErrorKind::BadGateway,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    pub(crate) fn log(&self) {
        match self {
            Self::Status { status, body } => {
                tracing::error!(status, body = %body, "Assistant backend error")
            }
            Self::EmptyMessage => tracing::debug!("Empty chat message"),
            _ => tracing::error!(error = %self, "Assistant backend failed"),
        }
    }
}

impl IntoResponse for AssistantError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
