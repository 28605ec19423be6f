//! Assistant Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::model::ChatModel;
use crate::presentation::handlers::{self, AssistantAppState};

/// Create the assistant router over any chat model
pub fn assistant_router<M>(model: M) -> Router
where
    M: ChatModel + Send + Sync + 'static,
{
    let state = AssistantAppState {
        model: Arc::new(model),
    };

    Router::new()
        .route("/", post(handlers::chat::<M>))
        .route("/greeting", get(handlers::greeting))
        .with_state(state)
}
