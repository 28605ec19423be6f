//! Request Repository
//!
//! The in-memory list every view reads. It is replaced wholesale by
//! `refresh`; there are no partial updates. When the remote store is
//! unreachable and nothing has been loaded yet, the last snapshot from the
//! local cache is served instead.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::entity::certificate_request::CertificateRequest;
use crate::domain::store::RequestStore;
use crate::domain::value_object::request_id::RequestId;
use crate::infra::snapshot_cache::SnapshotCache;

/// Whether the caller waits on a visible loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    Silent,
    Blocking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RefreshOutcome {
    /// Replaced from the remote store
    Fresh { count: usize },
    /// Remote failed on an empty repository; cached snapshot installed
    FromCache { count: usize },
    /// Remote failed; contents kept
    Unchanged,
}

/// Indicator state for the UI
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub loading: bool,
    pub syncing: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub count: usize,
    pub from_cache: bool,
}

/// Counts an in-flight operation until dropped
#[must_use]
pub struct ActivityGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> ActivityGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for ActivityGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct Contents {
    requests: Arc<Vec<CertificateRequest>>,
    last_updated: Option<DateTime<Utc>>,
    from_cache: bool,
}

pub struct RequestRepository<S> {
    store: Arc<S>,
    cache: SnapshotCache,
    contents: RwLock<Contents>,
    loading: AtomicUsize,
    syncing: AtomicUsize,
}

impl<S: RequestStore> RequestRepository<S> {
    pub fn new(store: Arc<S>, cache: SnapshotCache) -> Self {
        Self {
            store,
            cache,
            contents: RwLock::new(Contents::default()),
            loading: AtomicUsize::new(0),
            syncing: AtomicUsize::new(0),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Reload from the remote store. Never fails; see `RefreshOutcome`.
    pub async fn refresh(&self, mode: RefreshMode) -> RefreshOutcome {
        let _loading = (mode == RefreshMode::Blocking).then(|| ActivityGuard::enter(&self.loading));
        let _syncing = ActivityGuard::enter(&self.syncing);

        match self.store.list().await {
            Ok(mut requests) => {
                requests.sort_by(|a, b| b.id.cmp(&a.id));
                let count = requests.len();
                let requests = Arc::new(requests);
                {
                    let mut contents = self.contents.write().await;
                    contents.requests = Arc::clone(&requests);
                    contents.last_updated = Some(Utc::now());
                    contents.from_cache = false;
                }
                self.cache.save_requests(&requests).await;

                tracing::debug!(count, ?mode, "Repository refreshed");
                RefreshOutcome::Fresh { count }
            }
            Err(e) => {
                tracing::warn!(error = %e, ?mode, "Refresh failed, keeping current contents");
                self.fall_back_to_cache().await
            }
        }
    }

    async fn fall_back_to_cache(&self) -> RefreshOutcome {
        if !self.contents.read().await.requests.is_empty() {
            return RefreshOutcome::Unchanged;
        }
        let Some(cached) = self.cache.load_requests().await else {
            return RefreshOutcome::Unchanged;
        };

        let mut contents = self.contents.write().await;
        // A concurrent refresh may have succeeded meanwhile
        if !contents.requests.is_empty() {
            return RefreshOutcome::Unchanged;
        }
        let count = cached.len();
        contents.requests = Arc::new(cached);
        contents.from_cache = true;

        tracing::info!(count, "Serving cached snapshot");
        RefreshOutcome::FromCache { count }
    }

    /// Current contents, newest first
    pub async fn snapshot(&self) -> Arc<Vec<CertificateRequest>> {
        Arc::clone(&self.contents.read().await.requests)
    }

    pub async fn find(&self, id: RequestId) -> Option<CertificateRequest> {
        self.contents
            .read()
            .await
            .requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Mark a write as in flight
    pub fn begin_write(&self) -> ActivityGuard<'_> {
        ActivityGuard::enter(&self.syncing)
    }

    /// Mark a blocking operation as in flight
    pub fn begin_blocking(&self) -> ActivityGuard<'_> {
        ActivityGuard::enter(&self.loading)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst) > 0
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::SeqCst) > 0
    }

    pub async fn sync_status(&self) -> SyncStatus {
        let contents = self.contents.read().await;
        SyncStatus {
            loading: self.is_loading(),
            syncing: self.is_syncing(),
            last_updated: contents.last_updated,
            count: contents.requests.len(),
            from_cache: contents.from_cache,
        }
    }

    #[cfg(test)]
    fn in_flight(&self) -> (usize, usize) {
        (
            self.loading.load(Ordering::SeqCst),
            self.syncing.load(Ordering::SeqCst),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::CertificateConfig;
    use crate::domain::entity::certificate_request::fixtures::request;
    use crate::domain::entity::submission::NewCertificateRequest;
    use crate::domain::store::{StoreError, StoreResult};
    use crate::domain::value_object::request_status::RequestStatus;
    use crate::infra::embedded::EmbeddedStore;
    use crate::test_support::FlakyStore;
    use platform::local_store::LocalStore;
    use tokio::sync::Semaphore;

    fn seeded() -> EmbeddedStore {
        EmbeddedStore::with_requests(vec![
            request(3, "C", "c@x.co", RequestStatus::AtHr),
            request(9, "I", "i@x.co", RequestStatus::Returned),
            request(5, "E", "e@x.co", RequestStatus::SentHrAdmin),
        ])
    }

    async fn disk_cache(dir: &tempfile::TempDir) -> SnapshotCache {
        let store = LocalStore::open(dir.path()).await.unwrap();
        SnapshotCache::new(store, &CertificateConfig::default())
    }

    #[tokio::test]
    async fn test_refresh_sorts_newest_first_and_writes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RequestRepository::new(Arc::new(seeded()), disk_cache(&dir).await);

        assert_eq!(
            repo.refresh(RefreshMode::Blocking).await,
            RefreshOutcome::Fresh { count: 3 }
        );
        let ids: Vec<i64> = repo.snapshot().await.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![9, 5, 3]);

        let status = repo.sync_status().await;
        assert!(status.last_updated.is_some());
        assert!(!status.loading && !status.syncing && !status.from_cache);
        assert_eq!(repo.cache().load_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_failure_keeps_contents() {
        let store = Arc::new(FlakyStore::new(seeded()));
        let repo = RequestRepository::new(Arc::clone(&store), SnapshotCache::disabled());
        repo.refresh(RefreshMode::Silent).await;
        let before = repo.sync_status().await.last_updated;

        store.set_down(true);
        assert_eq!(repo.refresh(RefreshMode::Silent).await, RefreshOutcome::Unchanged);
        assert_eq!(repo.snapshot().await.len(), 3);
        assert_eq!(repo.sync_status().await.last_updated, before);
        assert!(!repo.is_syncing());
    }

    #[tokio::test]
    async fn test_failure_on_empty_repository_loads_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = disk_cache(&dir).await;
        cache
            .save_requests(&[request(4, "D", "d@x.co", RequestStatus::AtHr)])
            .await;

        let store = FlakyStore::new(seeded());
        store.set_down(true);
        let repo = RequestRepository::new(Arc::new(store), cache);

        assert_eq!(
            repo.refresh(RefreshMode::Blocking).await,
            RefreshOutcome::FromCache { count: 1 }
        );
        let status = repo.sync_status().await;
        assert!(status.from_cache);
        assert!(status.last_updated.is_none());
        assert!(!status.loading);
    }

    #[tokio::test]
    async fn test_failure_without_cache_stays_empty() {
        let store = FlakyStore::new(seeded());
        store.set_down(true);
        let repo = RequestRepository::new(Arc::new(store), SnapshotCache::disabled());
        assert_eq!(repo.refresh(RefreshMode::Silent).await, RefreshOutcome::Unchanged);
        assert!(repo.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_find() {
        let repo = RequestRepository::new(Arc::new(seeded()), SnapshotCache::disabled());
        repo.refresh(RefreshMode::Silent).await;
        assert_eq!(repo.find(RequestId::new(5)).await.unwrap().full_name, "E");
        assert!(repo.find(RequestId::new(6)).await.is_none());
    }

    /// Holds `list` until a permit is released
    struct GatedStore {
        gate: Arc<Semaphore>,
        inner: EmbeddedStore,
    }

    impl RequestStore for GatedStore {
        async fn list(&self) -> StoreResult<Vec<CertificateRequest>> {
            let permit = self.gate.acquire().await.map_err(|_| StoreError::Status(503))?;
            permit.forget();
            self.inner.list().await
        }
        async fn create(&self, request: &NewCertificateRequest) -> StoreResult<RequestId> {
            self.inner.create(request).await
        }
        async fn set_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()> {
            self.inner.set_status(id, status).await
        }
        async fn set_receipt(&self, id: RequestId, signer: &str) -> StoreResult<()> {
            self.inner.set_receipt(id, signer).await
        }
        async fn delete(&self, id: RequestId) -> StoreResult<()> {
            self.inner.delete(id).await
        }
        async fn notify(&self, id: RequestId) -> StoreResult<String> {
            self.inner.notify(id).await
        }
    }

    async fn wait_for<S: RequestStore>(repo: &RequestRepository<S>, expected: (usize, usize)) {
        for _ in 0..1000 {
            if repo.in_flight() == expected {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("indicators never reached {expected:?}, got {:?}", repo.in_flight());
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_clear_indicators() {
        let gate = Arc::new(Semaphore::new(0));
        let store = GatedStore {
            gate: Arc::clone(&gate),
            inner: seeded(),
        };
        let repo = Arc::new(RequestRepository::new(Arc::new(store), SnapshotCache::disabled()));

        let blocking = tokio::spawn({
            let repo = Arc::clone(&repo);
            async move { repo.refresh(RefreshMode::Blocking).await }
        });
        let silent = tokio::spawn({
            let repo = Arc::clone(&repo);
            async move { repo.refresh(RefreshMode::Silent).await }
        });

        wait_for(&repo, (1, 2)).await;
        assert!(repo.is_loading() && repo.is_syncing());

        gate.add_permits(1);
        // One refresh finished, the other still holds the syncing indicator
        for _ in 0..1000 {
            if repo.in_flight().1 == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(repo.is_syncing());

        gate.add_permits(1);
        blocking.await.unwrap();
        silent.await.unwrap();
        assert_eq!(repo.in_flight(), (0, 0));
        assert!(!repo.is_loading() && !repo.is_syncing());
    }

    #[tokio::test]
    async fn test_write_guard_raises_syncing() {
        let repo = RequestRepository::new(Arc::new(seeded()), SnapshotCache::disabled());
        {
            let _guard = repo.begin_write();
            assert!(repo.is_syncing());
        }
        assert!(!repo.is_syncing());
    }
}
