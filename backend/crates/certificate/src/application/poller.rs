//! Background polling
//!
//! Periodic silent refresh while staff watch a live screen. The task stops
//! when its handle is stopped or dropped.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::application::repository::{RefreshMode, RequestRepository};
use crate::domain::store::RequestStore;

/// Owns a polling task
#[derive(Debug)]
pub struct PollHandle {
    token: CancellationToken,
}

impl PollHandle {
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn stop(self) {
        self.token.cancel();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Refresh `repo` every `period`, first tick after one full period
pub fn spawn_polling<S>(repo: Arc<RequestRepository<S>>, period: Duration) -> PollHandle
where
    S: RequestStore + Send + Sync + 'static,
{
    let token = CancellationToken::new();
    let child = token.clone();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::debug!(period_secs = period.as_secs(), "Polling started");

        loop {
            tokio::select! {
                biased;
                _ = child.cancelled() => break,
                _ = ticker.tick() => {
                    repo.refresh(RefreshMode::Silent).await;
                }
            }
        }
        tracing::debug!("Polling stopped");
    });

    PollHandle { token }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{embedded::EmbeddedStore, snapshot_cache::SnapshotCache};
    use crate::test_support::FlakyStore;

    #[tokio::test(start_paused = true)]
    async fn test_polls_every_period_until_dropped() {
        let store = Arc::new(FlakyStore::new(EmbeddedStore::new()));
        let repo = Arc::new(RequestRepository::new(
            Arc::clone(&store),
            SnapshotCache::disabled(),
        ));

        let handle = spawn_polling(Arc::clone(&repo), Duration::from_secs(30));
        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(store.calls(), 0);

        tokio::time::sleep(Duration::from_secs(66)).await;
        assert_eq!(store.calls(), 3);
        assert!(handle.is_running());

        drop(handle);
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(store.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop() {
        let store = Arc::new(FlakyStore::new(EmbeddedStore::new()));
        let repo = Arc::new(RequestRepository::new(
            Arc::clone(&store),
            SnapshotCache::disabled(),
        ));

        let handle = spawn_polling(repo, Duration::from_secs(30));
        handle.stop();
        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(store.calls(), 0);
    }
}
