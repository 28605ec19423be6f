//! Domain Layer

pub mod credentials;
pub mod portal_session;
pub mod repository;
pub mod screen;

// Re-exports
pub use credentials::StaffCredentials;
pub use portal_session::{LoginOutcome, PortalSession, SessionEffect};
pub use repository::SessionRepository;
pub use screen::{DeleteTarget, Overlay, Screen};
