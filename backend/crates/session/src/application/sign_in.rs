//! Sign In Use Case
//!
//! Elevates a session with the shared staff account.

use certificate::domain::RequestStore;
use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::application::runtime::SessionRuntime;
use crate::domain::portal_session::{LoginOutcome, PortalSession};
use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

pub struct SignInUseCase<R, S>
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    sessions: Arc<R>,
    runtime: Arc<SessionRuntime<S>>,
    config: Arc<SessionConfig>,
}

impl<R, S> SignInUseCase<R, S>
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<R>, runtime: Arc<SessionRuntime<S>>, config: Arc<SessionConfig>) -> Self {
        Self {
            sessions,
            runtime,
            config,
        }
    }

    /// On failure the session is still saved, with its login error set
    pub async fn execute(
        &self,
        mut session: PortalSession,
        input: SignInInput,
    ) -> SessionResult<PortalSession> {
        let outcome = session.submit_login(&self.config.staff, &input.username, &input.password);
        self.sessions.update(&session).await?;

        match outcome {
            LoginOutcome::Elevated(effects) => {
                tracing::info!(session = %session.id, "Staff signed in");
                self.runtime.apply(session.id, &effects).await;
                Ok(session)
            }
            LoginOutcome::Rejected => Err(SessionError::InvalidCredentials),
        }
    }
}
