//! Certificate Request Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Requests, the status pipeline, derived views, store contract
//! - `application/` - Repository, use cases, polling, export
//! - `infra/` - Spreadsheet web app client, embedded store, snapshot cache
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Data flow
//! Every write goes to the remote store and is followed by a full refresh of
//! the repository; views are recomputed from the refreshed snapshot. The
//! local snapshot cache is only read when the remote store is unreachable.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::config::CertificateConfig;
pub use application::repository::{RefreshMode, RefreshOutcome, RequestRepository};
pub use error::{CertificateError, CertificateResult};
pub use infra::{AnyStore, SnapshotCache, StoreConfig};
pub use presentation::gate::StaffGate;
pub use presentation::handlers::CertificateAppState;
pub use presentation::router::{public_router, staff_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
