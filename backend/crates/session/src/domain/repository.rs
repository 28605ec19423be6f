//! Repository Traits

use chrono::Duration;
use kernel::id::SessionId;

use crate::domain::portal_session::PortalSession;
use crate::error::SessionResult;

/// Portal session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn create(&self, session: &PortalSession) -> SessionResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, id: SessionId) -> SessionResult<Option<PortalSession>>;

    /// Replace a stored session
    async fn update(&self, session: &PortalSession) -> SessionResult<()>;

    /// Delete a session
    async fn delete(&self, id: SessionId) -> SessionResult<()>;

    /// Remove sessions idle longer than `max_idle`, returning their IDs
    async fn evict_idle(&self, max_idle: Duration) -> SessionResult<Vec<SessionId>>;
}
