//! Session Router

use axum::{
    Router,
    routing::{get, post},
};
use certificate::RequestRepository;
use certificate::domain::RequestStore;
use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::application::runtime::SessionRuntime;
use crate::domain::repository::SessionRepository;
use crate::presentation::gate::SessionStaffGate;
use crate::presentation::handlers::{self, SessionAppState};

impl<R, S> SessionAppState<R, S>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    pub fn new(sessions: R, requests: Arc<RequestRepository<S>>, config: SessionConfig) -> Self {
        let runtime = SessionRuntime::new(requests, config.poll_interval);
        Self {
            sessions: Arc::new(sessions),
            runtime: Arc::new(runtime),
            config: Arc::new(config),
        }
    }

    /// Gate for the certificate staff routes, sharing these sessions
    pub fn staff_gate(&self) -> SessionStaffGate<R> {
        SessionStaffGate {
            sessions: self.sessions.clone(),
            cookie: self.config.cookie.clone(),
        }
    }
}

/// Create the session router
pub fn session_router<R, S>(state: SessionAppState<R, S>) -> Router
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::current::<R, S>))
        .route("/navigate", post(handlers::navigate::<R, S>))
        .route("/toggle", post(handlers::toggle_staff::<R, S>))
        .route("/focus", post(handlers::focus::<R, S>))
        .route("/login", post(handlers::login::<R, S>))
        .route("/login/close", post(handlers::close_login::<R, S>))
        .route("/delete", post(handlers::request_delete::<R, S>))
        .route("/delete/confirm", post(handlers::confirm_delete::<R, S>))
        .route("/delete/cancel", post(handlers::cancel_delete::<R, S>))
        .with_state(state)
}
