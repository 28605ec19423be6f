//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use assistant::{GeminiClient, assistant_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use certificate::{
    AnyStore, CertificateAppState, RefreshMode, RefreshOutcome, RequestRepository, SnapshotCache,
    public_router, staff_router,
};
use platform::local_store::LocalStore;
use session::{InMemorySessionRepository, SessionAppState, session_router, spawn_sweeper};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,certificate=info,session=info,assistant=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Remote store
    let store = AnyStore::probe(&config.store)?;
    tracing::info!(channel = store.channel(), "Request store selected");

    // Local snapshot cache; the portal still runs without one
    let cache = match LocalStore::open(config.cache_dir.clone()).await {
        Ok(local) => SnapshotCache::new(local, &config.certificate),
        Err(e) => {
            tracing::warn!(
                error = %e,
                dir = %config.cache_dir.display(),
                "Local cache unavailable, continuing without it"
            );
            SnapshotCache::disabled()
        }
    };

    let requests = Arc::new(RequestRepository::new(Arc::new(store), cache));

    // Initial load: errors here should not prevent server startup
    match requests.refresh(RefreshMode::Blocking).await {
        RefreshOutcome::Fresh { count } => {
            tracing::info!(requests = count, "Initial load completed");
        }
        RefreshOutcome::FromCache { count } => {
            tracing::warn!(requests = count, "Remote store unreachable, serving cached snapshot");
        }
        RefreshOutcome::Unchanged => {
            tracing::warn!("Remote store unreachable and no cached snapshot, starting empty");
        }
    }

    // Feature state
    let certificates = CertificateAppState::new(requests.clone(), config.certificate);
    let sessions = SessionAppState::new(InMemorySessionRepository::new(), requests, config.session);
    let gemini = GeminiClient::new(config.assistant)?;
    if !gemini.is_configured() {
        tracing::warn!("GEMINI_API_KEY not set, the assistant will only apologise");
    }

    // Idle session cleanup
    spawn_sweeper(
        sessions.sessions.clone(),
        sessions.runtime.clone(),
        sessions.config.clone(),
    );

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/requests", public_router(certificates.clone()))
        .nest("/api/staff", staff_router(certificates, sessions.staff_gate()))
        .nest("/api/session", session_router(sessions))
        .nest("/api/chat", assistant_router(gemini))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    // Start server
    tracing::info!("Listening on {}", config.addr);

    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
