//! Notify Use Case
//!
//! Sends the "ready for pickup" email. The remote call runs on its own task
//! so that it completes even if the caller goes away; the outcome comes back
//! over a oneshot channel.

use std::sync::Arc;
use tokio::sync::oneshot;

use crate::application::repository::{RefreshMode, RequestRepository};
use crate::domain::store::{RequestStore, StoreAction};
use crate::domain::value_object::request_id::RequestId;
use crate::error::{CertificateError, CertificateResult};

/// Notify use case
pub struct NotifyUseCase<S>
where
    S: RequestStore + Send + Sync + 'static,
{
    repo: Arc<RequestRepository<S>>,
}

impl<S> NotifyUseCase<S>
where
    S: RequestStore + Send + Sync + 'static,
{
    pub fn new(repo: Arc<RequestRepository<S>>) -> Self {
        Self { repo }
    }

    /// Returns the outcome text recorded by the store
    pub async fn execute(&self, id: RequestId) -> CertificateResult<String> {
        let (tx, rx) = oneshot::channel();
        let repo = Arc::clone(&self.repo);

        tokio::spawn(async move {
            let result = {
                let _syncing = repo.begin_write();
                repo.store().notify(id).await
            };
            match &result {
                Ok(outcome) => tracing::info!(id = %id, outcome = %outcome, "Notification sent"),
                Err(e) => tracing::warn!(id = %id, error = %e, "Notification failed"),
            }
            // lastEmailStatus is written remotely either way
            repo.refresh(RefreshMode::Silent).await;
            let _ = tx.send(result);
        });

        rx.await
            .map_err(|_| CertificateError::Internal("notification task ended without a result".into()))?
            .map_err(CertificateError::store(StoreAction::Notify))
    }
}
