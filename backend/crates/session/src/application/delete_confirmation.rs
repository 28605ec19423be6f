//! Delete Confirmation Use Case
//!
//! Staff pick something to delete, then confirm or cancel. The
//! confirmation only closes once the deletion went through.

use certificate::application::delete::{DeleteOutput, DeleteRequestUseCase};
use certificate::domain::RequestStore;
use std::sync::Arc;

use crate::application::runtime::SessionRuntime;
use crate::domain::portal_session::PortalSession;
use crate::domain::repository::SessionRepository;
use crate::domain::screen::DeleteTarget;
use crate::error::{SessionError, SessionResult};

pub struct DeleteConfirmationUseCase<R, S>
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    sessions: Arc<R>,
    runtime: Arc<SessionRuntime<S>>,
}

impl<R, S> DeleteConfirmationUseCase<R, S>
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<R>, runtime: Arc<SessionRuntime<S>>) -> Self {
        Self { sessions, runtime }
    }

    pub async fn request(
        &self,
        mut session: PortalSession,
        target: DeleteTarget,
    ) -> SessionResult<PortalSession> {
        if !session.is_elevated() {
            return Err(SessionError::StaffOnly);
        }
        session.request_delete(target);
        self.sessions.update(&session).await?;
        Ok(session)
    }

    pub async fn cancel(&self, mut session: PortalSession) -> SessionResult<PortalSession> {
        session.cancel_delete();
        self.sessions.update(&session).await?;
        Ok(session)
    }

    pub async fn confirm(
        &self,
        mut session: PortalSession,
    ) -> SessionResult<(PortalSession, DeleteOutput)> {
        if !session.is_elevated() {
            return Err(SessionError::StaffOnly);
        }
        let target = session
            .pending_delete()
            .cloned()
            .ok_or(SessionError::NothingToConfirm)?;

        let deleter = DeleteRequestUseCase::new(self.runtime.requests().clone());
        let output = match &target {
            DeleteTarget::Request(id) => deleter.delete_request(*id).await?,
            DeleteTarget::Requester(email) => deleter.delete_requester(email).await?,
        };

        tracing::info!(
            session = %session.id,
            deleted = output.deleted.len(),
            "Deletion confirmed"
        );
        session.finish_delete();
        self.sessions.update(&session).await?;
        Ok((session, output))
    }
}
