//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use chrono::Utc;
use std::sync::Arc;

use crate::application::config::CertificateConfig;
use crate::application::repository::{RefreshMode, RefreshOutcome, RequestRepository, SyncStatus};
use crate::application::{
    ConfirmReceiptUseCase, NotifyUseCase, PortalQueries, Report, SubmitRequestUseCase,
    TrackingHit, UpdateStatusUseCase, export_csv,
};
use crate::domain::entity::{certificate_request::CertificateRequest, user_profile::UserProfile};
use crate::domain::store::RequestStore;
use crate::domain::value_object::request_id::RequestId;
use crate::domain::views::{board::PublicBoard, directory::RequesterSummary};
use crate::error::CertificateResult;
use crate::presentation::dto::{
    CatalogueResponse, NotifyResponse, ReceiptBody, SearchQuery, StatusBody,
    StatusUpdateResponse, SubmitRequestBody, SubmitResponse,
};

/// Shared state for certificate handlers
#[derive(Clone)]
pub struct CertificateAppState<S>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<RequestRepository<S>>,
    pub config: Arc<CertificateConfig>,
}

impl<S> CertificateAppState<S>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    fn queries(&self) -> PortalQueries<S> {
        PortalQueries::new(self.repo.clone(), self.config.clone())
    }
}

// ============================================================================
// Public
// ============================================================================

/// POST /api/requests
pub async fn submit<S>(
    State(state): State<CertificateAppState<S>>,
    Json(body): Json<SubmitRequestBody>,
) -> CertificateResult<impl IntoResponse>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let use_case = SubmitRequestUseCase::new(state.repo.clone());
    let output = use_case.execute(body.into()).await?;

    Ok((StatusCode::CREATED, Json(SubmitResponse { id: output.id })))
}

/// GET /api/requests/profile
pub async fn profile<S>(State(state): State<CertificateAppState<S>>) -> Json<UserProfile>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.queries().profile().await)
}

/// GET /api/requests/catalogue
pub async fn catalogue() -> Json<CatalogueResponse> {
    Json(CatalogueResponse::build())
}

/// GET /api/requests/track?q=
pub async fn track<S>(
    State(state): State<CertificateAppState<S>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<TrackingHit>>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.queries().track(&query.q).await)
}

/// POST /api/requests/{id}/receipt
pub async fn confirm_receipt<S>(
    State(state): State<CertificateAppState<S>>,
    Path(id): Path<RequestId>,
    Json(body): Json<ReceiptBody>,
) -> CertificateResult<StatusCode>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let use_case = ConfirmReceiptUseCase::new(state.repo.clone());
    use_case.execute(id, &body.signer_name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/requests/board
pub async fn board<S>(State(state): State<CertificateAppState<S>>) -> Json<PublicBoard>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.queries().board().await)
}

/// GET /api/requests/sync
pub async fn sync_status<S>(State(state): State<CertificateAppState<S>>) -> Json<SyncStatus>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.repo.sync_status().await)
}

// ============================================================================
// Staff
// ============================================================================

/// GET /api/staff/requests?q=
pub async fn staff_list<S>(
    State(state): State<CertificateAppState<S>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<CertificateRequest>>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.queries().staff_list(&query.q).await)
}

/// POST /api/staff/requests/refresh
pub async fn refresh<S>(State(state): State<CertificateAppState<S>>) -> Json<RefreshOutcome>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.repo.refresh(RefreshMode::Blocking).await)
}

/// PUT /api/staff/requests/{id}/status
pub async fn update_status<S>(
    State(state): State<CertificateAppState<S>>,
    Path(id): Path<RequestId>,
    Json(body): Json<StatusBody>,
) -> CertificateResult<Json<StatusUpdateResponse>>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let use_case = UpdateStatusUseCase::new(state.repo.clone());
    let output = use_case.execute(id, body.status).await?;

    Ok(Json(StatusUpdateResponse {
        id,
        status: body.status,
        transition: output.transition,
    }))
}

/// POST /api/staff/requests/{id}/notify
pub async fn notify<S>(
    State(state): State<CertificateAppState<S>>,
    Path(id): Path<RequestId>,
) -> CertificateResult<Json<NotifyResponse>>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let use_case = NotifyUseCase::new(state.repo.clone());
    let outcome = use_case.execute(id).await?;
    Ok(Json(NotifyResponse { id, outcome }))
}

/// GET /api/staff/report
pub async fn report<S>(State(state): State<CertificateAppState<S>>) -> Json<Report>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.queries().report().await)
}

/// GET /api/staff/requesters?q=
pub async fn requesters<S>(
    State(state): State<CertificateAppState<S>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<RequesterSummary>>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    Json(state.queries().requesters(&query.q).await)
}

/// GET /api/staff/export.csv
pub async fn export<S>(
    State(state): State<CertificateAppState<S>>,
) -> CertificateResult<impl IntoResponse>
where
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let snapshot = state.repo.snapshot().await;
    let export = export_csv(&snapshot, &state.config.export_prefix, Utc::now().date_naive())?;

    tracing::info!(rows = snapshot.len(), file = %export.filename, "CSV exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.content,
    ))
}
