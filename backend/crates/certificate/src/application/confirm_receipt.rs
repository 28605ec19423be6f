//! Confirm Receipt Use Case
//!
//! Records the requester's pickup signature.

use std::sync::Arc;

use crate::application::repository::{RefreshMode, RequestRepository};
use crate::domain::pipeline;
use crate::domain::store::{RequestStore, StoreAction};
use crate::domain::value_object::{request_id::RequestId, text};
use crate::error::{CertificateError, CertificateResult};

/// Confirm receipt use case
pub struct ConfirmReceiptUseCase<S>
where
    S: RequestStore,
{
    repo: Arc<RequestRepository<S>>,
}

impl<S> ConfirmReceiptUseCase<S>
where
    S: RequestStore,
{
    pub fn new(repo: Arc<RequestRepository<S>>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: RequestId, signer_name: &str) -> CertificateResult<()> {
        let signer = text::non_blank(signer_name).ok_or(CertificateError::MissingSigner)?;
        let request = self
            .repo
            .find(id)
            .await
            .ok_or(CertificateError::RequestNotFound(id))?;

        pipeline::check_receipt(&request).map_err(|rejected| {
            CertificateError::ReceiptNotAllowed {
                id,
                status: rejected.status,
            }
        })?;

        {
            let _syncing = self.repo.begin_write();
            self.repo
                .store()
                .set_receipt(id, &signer)
                .await
                .map_err(CertificateError::store(StoreAction::SetReceipt))?;
        }

        tracing::info!(id = %id, corrected = request.has_receipt(), "Receipt recorded");
        self.repo.refresh(RefreshMode::Silent).await;
        Ok(())
    }
}
