//! Infrastructure Layer
//!
//! Remote store implementations and the local snapshot cache.

pub mod any_store;
pub mod embedded;
pub mod snapshot_cache;
pub mod web_app;

pub use any_store::{AnyStore, StoreConfig};
pub use embedded::EmbeddedStore;
pub use snapshot_cache::SnapshotCache;
pub use web_app::WebAppStore;
