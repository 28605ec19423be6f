//! Portal Session Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Navigation state machine, staff credentials, repository trait
//! - `application/` - Use cases and the effect runtime
//! - `infra/` - In-memory session storage
//! - `presentation/` - HTTP handlers, DTOs, router, staff gate
//!
//! ## Model
//! A browser holds one opaque cookie naming a server-side session. The
//! session records which screen is shown, which overlay is open and whether
//! staff signed in. Transitions return effects (silent refresh, polling on
//! or off) that the runtime applies to the shared request repository.
//!
//! Sessions live in memory only; a restart signs every staff member out.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::{SessionRuntime, spawn_sweeper};
pub use domain::StaffCredentials;
pub use error::{SessionError, SessionResult};
pub use infra::memory::InMemorySessionRepository;
pub use presentation::gate::SessionStaffGate;
pub use presentation::handlers::SessionAppState;
pub use presentation::router::session_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::*;
    pub use crate::presentation::dto::*;
}
