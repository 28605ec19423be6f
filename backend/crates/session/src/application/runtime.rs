//! Effect Runtime
//!
//! Carries out the effects session transitions ask for: silent refreshes
//! of the shared request repository and one polling task per session.

use certificate::RequestRepository;
use certificate::application::poller::{PollHandle, spawn_polling};
use certificate::domain::RequestStore;
use kernel::id::SessionId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::portal_session::SessionEffect;

pub struct SessionRuntime<S> {
    requests: Arc<RequestRepository<S>>,
    poll_interval: Duration,
    polls: Mutex<HashMap<SessionId, PollHandle>>,
}

impl<S> SessionRuntime<S>
where
    S: RequestStore + Send + Sync + 'static,
{
    pub fn new(requests: Arc<RequestRepository<S>>, poll_interval: Duration) -> Self {
        Self {
            requests,
            poll_interval,
            polls: Mutex::new(HashMap::new()),
        }
    }

    pub fn requests(&self) -> &Arc<RequestRepository<S>> {
        &self.requests
    }

    /// Run `effects` for session `id`. Refreshes are started in the
    /// background and not awaited.
    pub async fn apply(&self, id: SessionId, effects: &[SessionEffect]) {
        for effect in effects {
            match *effect {
                SessionEffect::Refresh(mode) => {
                    let requests = self.requests.clone();
                    tokio::spawn(async move {
                        requests.refresh(mode).await;
                    });
                }
                SessionEffect::StartPolling => {
                    let handle = spawn_polling(self.requests.clone(), self.poll_interval);
                    // A replaced handle cancels its task on drop
                    self.polls.lock().await.insert(id, handle);
                    tracing::debug!(session = %id, "Session polling on");
                }
                SessionEffect::StopPolling => self.forget(id).await,
            }
        }
    }

    /// Stop polling for a session that is gone
    pub async fn forget(&self, id: SessionId) {
        if let Some(handle) = self.polls.lock().await.remove(&id) {
            handle.stop();
            tracing::debug!(session = %id, "Session polling off");
        }
    }

    pub async fn is_polling(&self, id: SessionId) -> bool {
        self.polls
            .lock()
            .await
            .get(&id)
            .is_some_and(PollHandle::is_running)
    }

    pub async fn polling_sessions(&self) -> usize {
        self.polls.lock().await.len()
    }
}
