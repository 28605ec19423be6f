//! Certificate Routers

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::CertificateConfig;
use crate::application::repository::RequestRepository;
use crate::domain::store::RequestStore;
use crate::presentation::gate::{StaffGate, require_staff};
use crate::presentation::handlers::{self, CertificateAppState};

impl<S> CertificateAppState<S>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<RequestRepository<S>>, config: CertificateConfig) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }
}

/// Requester-facing routes (no sign-in)
pub fn public_router<S>(state: CertificateAppState<S>) -> Router
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(handlers::submit::<S>))
        .route("/profile", get(handlers::profile::<S>))
        .route("/catalogue", get(handlers::catalogue))
        .route("/track", get(handlers::track::<S>))
        .route("/board", get(handlers::board::<S>))
        .route("/sync", get(handlers::sync_status::<S>))
        .route("/{id}/receipt", post(handlers::confirm_receipt::<S>))
        .with_state(state)
}

/// Staff routes, rejected unless `gate` recognises an elevated session
pub fn staff_router<S, G>(state: CertificateAppState<S>, gate: G) -> Router
where
    S: RequestStore + Clone + Send + Sync + 'static,
    G: StaffGate,
{
    Router::new()
        .route("/requests", get(handlers::staff_list::<S>))
        .route("/requests/refresh", post(handlers::refresh::<S>))
        .route("/requests/{id}/status", put(handlers::update_status::<S>))
        .route("/requests/{id}/notify", post(handlers::notify::<S>))
        .route("/report", get(handlers::report::<S>))
        .route("/requesters", get(handlers::requesters::<S>))
        .route("/export.csv", get(handlers::export::<S>))
        .route_layer(middleware::from_fn_with_state(gate, require_staff::<G>))
        .with_state(state)
}
