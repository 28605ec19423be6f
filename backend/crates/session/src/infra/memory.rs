//! In-memory session repository
//!
//! Sessions, and with them staff elevation, do not survive a restart.

use chrono::Duration;
use kernel::id::SessionId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::portal_session::PortalSession;
use crate::domain::repository::SessionRepository;
use crate::error::SessionResult;

#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, PortalSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: &PortalSession) -> SessionResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: SessionId) -> SessionResult<Option<PortalSession>> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    async fn update(&self, session: &PortalSession) -> SessionResult<()> {
        // Deleted concurrently: do not resurrect it
        if let Some(slot) = self.sessions.write().await.get_mut(&session.id) {
            *slot = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: SessionId) -> SessionResult<()> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }

    async fn evict_idle(&self, max_idle: Duration) -> SessionResult<Vec<SessionId>> {
        let mut sessions = self.sessions.write().await;
        let idle: Vec<SessionId> = sessions
            .values()
            .filter(|s| s.is_idle(max_idle))
            .map(|s| s.id)
            .collect();
        for id in &idle {
            sessions.remove(id);
        }

        if !idle.is_empty() {
            tracing::info!(sessions_evicted = idle.len(), "Evicted idle portal sessions");
        }
        Ok(idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_crud() {
        let repo = InMemorySessionRepository::new();
        let mut session = PortalSession::new();
        repo.create(&session).await.unwrap();

        session.toggle_staff();
        repo.update(&session).await.unwrap();
        let found = repo.find_by_id(session.id).await.unwrap().unwrap();
        assert!(found.overlay().is_some());

        repo.delete(session.id).await.unwrap();
        assert!(repo.find_by_id(session.id).await.unwrap().is_none());

        repo.update(&session).await.unwrap();
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_evict_idle() {
        let repo = InMemorySessionRepository::new();
        let fresh = PortalSession::new();
        let mut stale = PortalSession::new();
        stale.last_seen_at = Utc::now() - Duration::hours(3);
        repo.create(&fresh).await.unwrap();
        repo.create(&stale).await.unwrap();

        let evicted = repo.evict_idle(Duration::hours(1)).await.unwrap();
        assert_eq!(evicted, vec![stale.id]);
        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_id(fresh.id).await.unwrap().is_some());
    }
}
