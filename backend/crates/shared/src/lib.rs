//! Shared Kernel - vocabulary every portal crate agrees on
//!
//! This crate holds the small core that all portal crates depend on:
//! - The unified error type and its HTTP classification
//! - Typed identifiers for server-side entities
//!
//! Anything domain specific (certificate requests, sessions, the assistant)
//! lives in its own crate and converts into these types at the edge.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
