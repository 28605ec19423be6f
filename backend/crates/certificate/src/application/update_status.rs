//! Update Status Use Case
//!
//! Staff move a request to any pipeline state. Moves back down the pipeline
//! are allowed but logged.

use std::sync::Arc;

use crate::application::repository::{RefreshMode, RequestRepository};
use crate::domain::pipeline::Transition;
use crate::domain::store::{RequestStore, StoreAction};
use crate::domain::value_object::{request_id::RequestId, request_status::RequestStatus};
use crate::error::{CertificateError, CertificateResult};

/// Update status output
pub struct UpdateStatusOutput {
    /// `None` when the request was not in the local snapshot
    pub transition: Option<Transition>,
}

/// Update status use case
pub struct UpdateStatusUseCase<S>
where
    S: RequestStore,
{
    repo: Arc<RequestRepository<S>>,
}

impl<S> UpdateStatusUseCase<S>
where
    S: RequestStore,
{
    pub fn new(repo: Arc<RequestRepository<S>>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: RequestId,
        status: RequestStatus,
    ) -> CertificateResult<UpdateStatusOutput> {
        let current = self.repo.find(id).await.map(|r| r.status);
        let transition = current.map(|from| Transition::classify(from, status));

        {
            let _syncing = self.repo.begin_write();
            self.repo
                .store()
                .set_status(id, status)
                .await
                .map_err(CertificateError::store(StoreAction::SetStatus))?;
        }

        match (current, transition) {
            (Some(from), Some(Transition::Backward)) => tracing::warn!(
                id = %id,
                from = from.code(),
                to = status.code(),
                "Request moved back down the pipeline"
            ),
            _ => tracing::info!(
                id = %id,
                to = status.code(),
                transition = ?transition,
                "Request status updated"
            ),
        }

        self.repo.refresh(RefreshMode::Silent).await;
        Ok(UpdateStatusOutput { transition })
    }
}
