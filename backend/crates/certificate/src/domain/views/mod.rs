//! Derived Views
//!
//! Pure functions over the repository snapshot. Nothing here is persisted.

pub mod board;
pub mod directory;
pub mod search;
pub mod stats;
