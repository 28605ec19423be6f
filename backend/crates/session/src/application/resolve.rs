//! Resolve Session Use Case
//!
//! Maps the session cookie to a stored session, starting a new one when the
//! cookie is missing, malformed or points at an evicted session.

use kernel::id::SessionId;
use std::sync::Arc;

use crate::domain::portal_session::PortalSession;
use crate::domain::repository::SessionRepository;
use crate::error::SessionResult;

/// Resolved session
pub struct ResolvedSession {
    pub session: PortalSession,
    /// A cookie must be set on the response
    pub created: bool,
}

pub struct ResolveSessionUseCase<R>
where
    R: SessionRepository,
{
    sessions: Arc<R>,
}

impl<R> ResolveSessionUseCase<R>
where
    R: SessionRepository,
{
    pub fn new(sessions: Arc<R>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, cookie: Option<&str>) -> SessionResult<ResolvedSession> {
        let existing = match cookie.and_then(|value| value.parse::<SessionId>().ok()) {
            Some(id) => self.sessions.find_by_id(id).await?,
            None => None,
        };

        if let Some(mut session) = existing {
            session.touch();
            self.sessions.update(&session).await?;
            return Ok(ResolvedSession {
                session,
                created: false,
            });
        }

        let session = PortalSession::new();
        self.sessions.create(&session).await?;
        tracing::debug!(session = %session.id, "Portal session started");
        Ok(ResolvedSession {
            session,
            created: true,
        })
    }

    /// Elevation check without creating anything
    pub async fn is_elevated(&self, cookie: Option<&str>) -> bool {
        let Some(id) = cookie.and_then(|value| value.parse::<SessionId>().ok()) else {
            return false;
        };
        matches!(
            self.sessions.find_by_id(id).await,
            Ok(Some(session)) if session.is_elevated()
        )
    }
}
