//! Idle session sweep

use certificate::domain::RequestStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::config::SessionConfig;
use crate::application::runtime::SessionRuntime;
use crate::domain::repository::SessionRepository;

/// Drop idle sessions and their polling tasks once
pub async fn sweep_idle<R, S>(sessions: &R, runtime: &SessionRuntime<S>, config: &SessionConfig)
where
    R: SessionRepository,
    S: RequestStore + Send + Sync + 'static,
{
    match sessions.evict_idle(config.max_idle()).await {
        Ok(evicted) => {
            for id in evicted {
                runtime.forget(id).await;
            }
        }
        Err(e) => tracing::warn!(error = %e, "Idle session sweep failed"),
    }
}

/// Sweep every `config.sweep_interval` for the life of the process
pub fn spawn_sweeper<R, S>(
    sessions: Arc<R>,
    runtime: Arc<SessionRuntime<S>>,
    config: Arc<SessionConfig>,
) -> JoinHandle<()>
where
    R: SessionRepository + Send + Sync + 'static,
    S: RequestStore + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.sweep_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            sweep_idle(sessions.as_ref(), runtime.as_ref(), config.as_ref()).await;
        }
    })
}
