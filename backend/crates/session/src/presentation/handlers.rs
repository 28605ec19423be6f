//! HTTP Handlers
//!
//! Every handler resolves the caller's session from the cookie first and
//! sets a fresh cookie when a new session had to be started.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use certificate::domain::RequestStore;
use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::application::{
    DeleteConfirmationUseCase, NavigateUseCase, ResolveSessionUseCase, ResolvedSession,
    SessionRuntime, SignInInput, SignInUseCase,
};
use crate::domain::portal_session::PortalSession;
use crate::domain::repository::SessionRepository;
use crate::error::SessionResult;
use crate::presentation::dto::{
    DeleteBody, DeleteConfirmedResponse, LoginBody, NavigateBody, SessionView,
};

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<R, S>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<R>,
    pub runtime: Arc<SessionRuntime<S>>,
    pub config: Arc<SessionConfig>,
}

impl<R, S> SessionAppState<R, S>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    fn navigator(&self) -> NavigateUseCase<R, S> {
        NavigateUseCase::new(self.sessions.clone(), self.runtime.clone())
    }

    fn deletions(&self) -> DeleteConfirmationUseCase<R, S> {
        DeleteConfirmationUseCase::new(self.sessions.clone(), self.runtime.clone())
    }

    async fn resolve(&self, headers: &HeaderMap) -> SessionResult<ResolvedSession> {
        let token = self.config.cookie.extract(headers);
        ResolveSessionUseCase::new(self.sessions.clone())
            .execute(token.as_deref())
            .await
    }

    /// Attach the session cookie when the session is new
    fn finish(&self, created: bool, session_id: &str, mut response: Response) -> Response {
        if created {
            if let Ok(value) = HeaderValue::from_str(&self.config.cookie.build_set_cookie(session_id)) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        response
    }
}

/// Render a use case result, keeping the cookie on errors too
async fn run<R, S, F, Fut, T>(
    state: &SessionAppState<R, S>,
    headers: &HeaderMap,
    f: F,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
    F: FnOnce(PortalSession) -> Fut,
    Fut: Future<Output = SessionResult<T>>,
    T: IntoResponse,
{
    let ResolvedSession { session, created } = match state.resolve(headers).await {
        Ok(resolved) => resolved,
        Err(e) => return e.into_response(),
    };
    let id = session.id.to_string();
    let response = match f(session).await {
        Ok(body) => body.into_response(),
        Err(e) => e.into_response(),
    };
    state.finish(created, &id, response)
}

fn view(session: PortalSession) -> Json<SessionView> {
    Json(SessionView::from(&session))
}

// ============================================================================
// Navigation
// ============================================================================

/// GET /api/session
pub async fn current<R, S>(State(state): State<SessionAppState<R, S>>, headers: HeaderMap) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    run(&state, &headers, |session| async move { SessionResult::Ok(view(session)) }).await
}

/// POST /api/session/navigate
pub async fn navigate<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
    Json(body): Json<NavigateBody>,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let navigator = state.navigator();
    run(&state, &headers, |session| async move {
        navigator
            .navigate(session, body.screen, body.track_query.as_deref())
            .await
            .map(view)
    })
    .await
}

/// POST /api/session/toggle
pub async fn toggle_staff<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let navigator = state.navigator();
    run(&state, &headers, |session| async move {
        navigator.toggle_staff(session).await.map(view)
    })
    .await
}

/// POST /api/session/focus
pub async fn focus<R, S>(State(state): State<SessionAppState<R, S>>, headers: HeaderMap) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let navigator = state.navigator();
    run(&state, &headers, |session| async move {
        navigator.focus(session).await.map(view)
    })
    .await
}

// ============================================================================
// Staff login
// ============================================================================

/// POST /api/session/login
pub async fn login<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
    Json(body): Json<LoginBody>,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.sessions.clone(),
        state.runtime.clone(),
        state.config.clone(),
    );
    let input = SignInInput {
        username: body.username,
        password: body.password,
    };
    run(&state, &headers, |session| async move {
        use_case.execute(session, input).await.map(view)
    })
    .await
}

/// POST /api/session/login/close
pub async fn close_login<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let navigator = state.navigator();
    run(&state, &headers, |session| async move {
        navigator.close_login(session).await.map(view)
    })
    .await
}

// ============================================================================
// Delete confirmation
// ============================================================================

/// POST /api/session/delete
pub async fn request_delete<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
    Json(body): Json<DeleteBody>,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let deletions = state.deletions();
    run(&state, &headers, |session| async move {
        deletions.request(session, body.target).await.map(view)
    })
    .await
}

/// POST /api/session/delete/cancel
pub async fn cancel_delete<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let deletions = state.deletions();
    run(&state, &headers, |session| async move {
        deletions.cancel(session).await.map(view)
    })
    .await
}

/// POST /api/session/delete/confirm
pub async fn confirm_delete<R, S>(
    State(state): State<SessionAppState<R, S>>,
    headers: HeaderMap,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
    S: RequestStore + Clone + Send + Sync + 'static,
{
    let deletions = state.deletions();
    run(&state, &headers, |session| async move {
        deletions.confirm(session).await.map(|(session, output)| {
            Json(DeleteConfirmedResponse {
                session: SessionView::from(&session),
                deleted: output.deleted,
            })
        })
    })
    .await
}
