//! Store doubles shared by unit and scenario tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::domain::entity::{
    certificate_request::CertificateRequest, submission::NewCertificateRequest,
};
use crate::domain::store::{RequestStore, StoreError, StoreResult};
use crate::domain::value_object::{request_id::RequestId, request_status::RequestStatus};
use crate::infra::embedded::EmbeddedStore;

/// Embedded store that can be switched off and counts remote calls
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: EmbeddedStore,
    down: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl FlakyStore {
    pub fn new(inner: EmbeddedStore) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            Err(StoreError::Status(503))
        } else {
            Ok(())
        }
    }
}

impl RequestStore for FlakyStore {
    async fn list(&self) -> StoreResult<Vec<CertificateRequest>> {
        self.check()?;
        self.inner.list().await
    }

    async fn create(&self, request: &NewCertificateRequest) -> StoreResult<RequestId> {
        self.check()?;
        self.inner.create(request).await
    }

    async fn set_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()> {
        self.check()?;
        self.inner.set_status(id, status).await
    }

    async fn set_receipt(&self, id: RequestId, signer: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.set_receipt(id, signer).await
    }

    async fn delete(&self, id: RequestId) -> StoreResult<()> {
        self.check()?;
        self.inner.delete(id).await
    }

    async fn notify(&self, id: RequestId) -> StoreResult<String> {
        self.check()?;
        self.inner.notify(id).await
    }
}
