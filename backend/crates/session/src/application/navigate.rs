//! Navigate Use Case
//!
//! Screen changes, the staff toggle and focus regain. Each one persists
//! the session and hands its effects to the runtime.

use certificate::domain::RequestStore;
use std::sync::Arc;

use crate::application::runtime::SessionRuntime;
use crate::domain::portal_session::{PortalSession, SessionEffect};
use crate::domain::repository::SessionRepository;
use crate::domain::screen::Screen;
use crate::error::SessionResult;

pub struct NavigateUseCase<R, S>
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    sessions: Arc<R>,
    runtime: Arc<SessionRuntime<S>>,
}

impl<R, S> NavigateUseCase<R, S>
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<R>, runtime: Arc<SessionRuntime<S>>) -> Self {
        Self { sessions, runtime }
    }

    pub async fn navigate(
        &self,
        mut session: PortalSession,
        screen: Screen,
        track_query: Option<&str>,
    ) -> SessionResult<PortalSession> {
        let effects = session.navigate(screen, track_query);
        tracing::debug!(session = %session.id, requested = %screen, now = %session.screen(), "Navigate");
        self.commit(session, &effects).await
    }

    pub async fn toggle_staff(&self, mut session: PortalSession) -> SessionResult<PortalSession> {
        let was_elevated = session.is_elevated();
        let effects = session.toggle_staff();
        if was_elevated {
            tracing::info!(session = %session.id, "Staff signed out");
        }
        self.commit(session, &effects).await
    }

    pub async fn close_login(&self, mut session: PortalSession) -> SessionResult<PortalSession> {
        session.close_login();
        self.commit(session, &[]).await
    }

    pub async fn focus(&self, session: PortalSession) -> SessionResult<PortalSession> {
        let effects = session.focus();
        self.commit(session, &effects).await
    }

    async fn commit(
        &self,
        session: PortalSession,
        effects: &[SessionEffect],
    ) -> SessionResult<PortalSession> {
        self.sessions.update(&session).await?;
        self.runtime.apply(session.id, effects).await;
        Ok(session)
    }
}
