//! Snapshot Cache
//!
//! Last successfully fetched request list and the remembered profile, kept in
//! the local key/value store. Read only when the remote store is unreachable.

use platform::local_store::LocalStore;

use crate::application::config::CertificateConfig;
use crate::domain::entity::{certificate_request::CertificateRequest, user_profile::UserProfile};

#[derive(Debug, Clone)]
pub struct SnapshotCache {
    store: Option<LocalStore>,
    snapshot_key: String,
    profile_key: String,
}

impl SnapshotCache {
    pub fn new(store: LocalStore, config: &CertificateConfig) -> Self {
        Self {
            store: Some(store),
            snapshot_key: config.snapshot_key.clone(),
            profile_key: config.profile_key.clone(),
        }
    }

    /// Cache that never stores anything
    pub fn disabled() -> Self {
        let config = CertificateConfig::default();
        Self {
            store: None,
            snapshot_key: config.snapshot_key,
            profile_key: config.profile_key,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    pub async fn load_requests(&self) -> Option<Vec<CertificateRequest>> {
        self.store.as_ref()?.get(&self.snapshot_key).await
    }

    pub async fn save_requests(&self, requests: &[CertificateRequest]) {
        let Some(store) = &self.store else { return };
        if let Err(e) = store.set(&self.snapshot_key, requests).await {
            tracing::warn!(error = %e, "Failed to write request snapshot");
        }
    }

    pub async fn load_profile(&self) -> Option<UserProfile> {
        self.store.as_ref()?.get(&self.profile_key).await
    }

    pub async fn save_profile(&self, profile: &UserProfile) {
        let Some(store) = &self.store else { return };
        if let Err(e) = store.set(&self.profile_key, profile).await {
            tracing::warn!(error = %e, "Failed to write user profile");
        }
    }
}
