//! Submit Request Use Case
//!
//! Validates the form, creates the request remotely and remembers the
//! requester's contact details for next time.

use std::sync::Arc;

use crate::application::repository::{RefreshMode, RequestRepository};
use crate::domain::entity::{submission::SubmissionForm, user_profile::UserProfile};
use crate::domain::store::{RequestStore, StoreAction};
use crate::domain::value_object::request_id::RequestId;
use crate::error::{CertificateError, CertificateResult};

/// Submit output
pub struct SubmitOutput {
    pub id: RequestId,
}

/// Submit request use case
pub struct SubmitRequestUseCase<S>
where
    S: RequestStore,
{
    repo: Arc<RequestRepository<S>>,
}

impl<S> SubmitRequestUseCase<S>
where
    S: RequestStore,
{
    pub fn new(repo: Arc<RequestRepository<S>>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: SubmissionForm) -> CertificateResult<SubmitOutput> {
        let request = form.validate()?;

        let id = {
            let _loading = self.repo.begin_blocking();
            let _syncing = self.repo.begin_write();
            self.repo
                .store()
                .create(&request)
                .await
                .map_err(CertificateError::store(StoreAction::Create))?
        };

        tracing::info!(
            id = %id,
            types = request.selected_types.len(),
            visa = request.target_country.is_some(),
            "Certificate request submitted"
        );

        self.repo
            .cache()
            .save_profile(&UserProfile::from(&request))
            .await;
        self.repo.refresh(RefreshMode::Silent).await;

        Ok(SubmitOutput { id })
    }
}
