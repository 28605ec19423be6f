//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the portal crates:
//! - Session cookie handling
//! - Constant-time comparison for the staff credential check
//! - Outbound HTTP client construction
//! - Local key/value persistence (the offline snapshot and remembered profile)

pub mod cookie;
pub mod crypto;
pub mod http_client;
pub mod local_store;
