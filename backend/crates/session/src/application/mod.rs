//! Application Layer
//!
//! Use cases over portal sessions and the runtime that carries out their
//! effects.

pub mod config;
pub mod delete_confirmation;
pub mod navigate;
pub mod resolve;
pub mod runtime;
pub mod sign_in;
pub mod sweep;

// Re-exports
pub use config::SessionConfig;
pub use delete_confirmation::DeleteConfirmationUseCase;
pub use navigate::NavigateUseCase;
pub use resolve::{ResolveSessionUseCase, ResolvedSession};
pub use runtime::SessionRuntime;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sweep::{spawn_sweeper, sweep_idle};
