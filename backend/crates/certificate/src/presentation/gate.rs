//! Staff Gate
//!
//! Staff routes are guarded by whatever owns the notion of an elevated
//! session; this crate only asks the question.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use std::future::Future;

/// Decides whether a request comes from an elevated staff session
pub trait StaffGate: Clone + Send + Sync + 'static {
    fn is_staff(&self, headers: &HeaderMap) -> impl Future<Output = bool> + Send;
}

/// Middleware that rejects non-staff callers with 401
pub async fn require_staff<G: StaffGate>(
    State(gate): State<G>,
    req: Request,
    next: Next,
) -> Response {
    if gate.is_staff(req.headers()).await {
        return next.run(req).await;
    }

    tracing::debug!(path = %req.uri().path(), "Staff route refused");
    AppError::unauthorized("Staff sign-in required")
        .with_action("Sign in from the staff menu")
        .into_response()
}
