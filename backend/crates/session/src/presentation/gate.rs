//! Staff gate backed by portal sessions

use axum::http::HeaderMap;
use certificate::StaffGate;
use std::sync::Arc;

use crate::application::ResolveSessionUseCase;
use crate::application::config::CookieConfig;
use crate::domain::repository::SessionRepository;

/// Lets a request through when its session cookie names an elevated session
#[derive(Clone)]
pub struct SessionStaffGate<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<R>,
    pub cookie: CookieConfig,
}

impl<R> StaffGate for SessionStaffGate<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    async fn is_staff(&self, headers: &HeaderMap) -> bool {
        let token = self.cookie.extract(headers);
        ResolveSessionUseCase::new(self.sessions.clone())
            .is_elevated(token.as_deref())
            .await
    }
}
