//! Delete Use Cases
//!
//! Removes a single request, or every request filed under one email address.

use std::sync::Arc;

use crate::application::repository::{RefreshMode, RequestRepository};
use crate::domain::store::{RequestStore, StoreAction};
use crate::domain::value_object::{email::Email, request_id::RequestId};
use crate::error::{CertificateError, CertificateResult};

/// Delete output
#[derive(Debug)]
pub struct DeleteOutput {
    pub deleted: Vec<RequestId>,
}

/// Delete use case
pub struct DeleteRequestUseCase<S>
where
    S: RequestStore,
{
    repo: Arc<RequestRepository<S>>,
}

impl<S> DeleteRequestUseCase<S>
where
    S: RequestStore,
{
    pub fn new(repo: Arc<RequestRepository<S>>) -> Self {
        Self { repo }
    }

    pub async fn delete_request(&self, id: RequestId) -> CertificateResult<DeleteOutput> {
        {
            let _loading = self.repo.begin_blocking();
            self.repo
                .store()
                .delete(id)
                .await
                .map_err(CertificateError::store(StoreAction::Delete))?;
        }

        tracing::info!(id = %id, "Request deleted");
        self.repo.refresh(RefreshMode::Silent).await;
        Ok(DeleteOutput { deleted: vec![id] })
    }

    /// Delete every request whose email matches, case-insensitively.
    ///
    /// Stops at the first remote failure; requests already removed stay
    /// removed.
    pub async fn delete_requester(&self, email: &str) -> CertificateResult<DeleteOutput> {
        let target = Email::from_store(email);
        let ids: Vec<RequestId> = self
            .repo
            .snapshot()
            .await
            .iter()
            .filter(|r| r.email.same_requester(&target))
            .map(|r| r.id)
            .collect();

        if ids.is_empty() {
            return Err(CertificateError::RequesterNotFound(email.trim().to_string()));
        }

        let mut deleted = Vec::with_capacity(ids.len());
        let result = {
            let _loading = self.repo.begin_blocking();
            let mut result = Ok(());
            for id in ids {
                if let Err(e) = self.repo.store().delete(id).await {
                    result = Err(e);
                    break;
                }
                deleted.push(id);
            }
            result
        };

        tracing::info!(
            email = %target.canonical(),
            deleted = deleted.len(),
            complete = result.is_ok(),
            "Requester deleted"
        );
        self.repo.refresh(RefreshMode::Silent).await;

        result.map_err(CertificateError::store(StoreAction::Delete))?;
        Ok(DeleteOutput { deleted })
    }
}
