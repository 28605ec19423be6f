//! Read-side queries
//!
//! Each query reads the current repository snapshot and derives a view.

use serde::Serialize;
use std::sync::Arc;

use crate::application::config::CertificateConfig;
use crate::application::repository::RequestRepository;
use crate::domain::entity::{certificate_request::CertificateRequest, user_profile::UserProfile};
use crate::domain::pipeline;
use crate::domain::store::RequestStore;
use crate::domain::views::{board::PublicBoard, directory, directory::RequesterSummary, search, stats::PipelineStats};

/// A tracking search result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingHit {
    pub request: CertificateRequest,
    pub progress: f64,
    pub receipt_enabled: bool,
    pub ready_for_pickup: bool,
}

impl From<&CertificateRequest> for TrackingHit {
    fn from(r: &CertificateRequest) -> Self {
        Self {
            request: r.clone(),
            progress: pipeline::progress(r.status),
            receipt_enabled: pipeline::check_receipt(r).is_ok(),
            ready_for_pickup: r.is_ready_for_pickup(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub stats: PipelineStats,
    pub requests: Vec<CertificateRequest>,
}

pub struct PortalQueries<S>
where
    S: RequestStore,
{
    repo: Arc<RequestRepository<S>>,
    config: Arc<CertificateConfig>,
}

impl<S> PortalQueries<S>
where
    S: RequestStore,
{
    pub fn new(repo: Arc<RequestRepository<S>>, config: Arc<CertificateConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn track(&self, query: &str) -> Vec<TrackingHit> {
        let snapshot = self.repo.snapshot().await;
        search::track(&snapshot, query)
            .into_iter()
            .map(TrackingHit::from)
            .collect()
    }

    pub async fn board(&self) -> PublicBoard {
        let snapshot = self.repo.snapshot().await;
        PublicBoard::build(
            &snapshot,
            self.config.board_ready_limit,
            self.config.board_processing_limit,
        )
    }

    pub async fn staff_list(&self, query: &str) -> Vec<CertificateRequest> {
        let snapshot = self.repo.snapshot().await;
        search::filter(&snapshot, query).into_iter().cloned().collect()
    }

    pub async fn report(&self) -> Report {
        let snapshot = self.repo.snapshot().await;
        Report {
            stats: PipelineStats::compute(&snapshot),
            requests: snapshot.as_ref().clone(),
        }
    }

    pub async fn requesters(&self, query: &str) -> Vec<RequesterSummary> {
        directory::search(&self.repo.snapshot().await, query)
    }

    pub async fn profile(&self) -> UserProfile {
        self.repo.cache().load_profile().await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repository::RefreshMode;
    use crate::domain::entity::certificate_request::fixtures::{request, with_receipt};
    use crate::domain::value_object::request_status::RequestStatus;
    use crate::infra::{embedded::EmbeddedStore, snapshot_cache::SnapshotCache};

    async fn queries() -> PortalQueries<EmbeddedStore> {
        let store = EmbeddedStore::with_requests(vec![
            request(1, "Somchai Jaidee", "s@x.co", RequestStatus::SentHrAdmin),
            request(2, "Malee Dee", "m@x.co", RequestStatus::Returned),
            with_receipt(request(3, "Somchai Jaidee", "S@x.co", RequestStatus::Returned), "S"),
        ]);
        let repo = Arc::new(RequestRepository::new(
            Arc::new(store),
            SnapshotCache::disabled(),
        ));
        repo.refresh(RefreshMode::Blocking).await;
        PortalQueries::new(repo, Arc::new(CertificateConfig::default()))
    }

    #[tokio::test]
    async fn test_track_hits_carry_progress_and_gate() {
        let q = queries().await;
        let hits = q.track("somchai").await;
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].request.id.value(), 3);
        assert!(hits[0].receipt_enabled);
        assert!(!hits[1].receipt_enabled);
        assert!((hits[1].progress - 2.0 / 6.0).abs() < f64::EPSILON);
        assert!(q.track("").await.is_empty());
    }

    #[tokio::test]
    async fn test_report_and_directory() {
        let q = queries().await;
        let report = q.report().await;
        assert_eq!(report.stats.total, 3);
        assert_eq!(report.stats.completed, 1);
        assert_eq!(report.requests.len(), 3);

        let requesters = q.requesters("").await;
        assert_eq!(requesters.len(), 2);
        assert_eq!(requesters[0].request_count, 2);
    }

    #[tokio::test]
    async fn test_board_and_staff_list() {
        let q = queries().await;
        let board = q.board().await;
        assert_eq!(board.ready.len(), 1);
        assert_eq!(board.processing.len(), 1);
        assert_eq!(q.staff_list("m@x").await.len(), 1);
        assert_eq!(q.profile().await, UserProfile::default());
    }
}
