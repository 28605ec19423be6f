//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::ChatUseCase;
use crate::domain::message::ChatMessage;
use crate::domain::model::ChatModel;
use crate::error::AssistantResult;
use crate::presentation::dto::{ChatRequest, ChatResponse};

/// Shared state for assistant handlers
pub struct AssistantAppState<M>
where
    M: ChatModel + Send + Sync + 'static,
{
    pub model: Arc<M>,
}

impl<M> Clone for AssistantAppState<M>
where
    M: ChatModel + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

/// GET /api/chat/greeting
pub async fn greeting() -> Json<ChatMessage> {
    Json(ChatMessage::greeting())
}

/// POST /api/chat
pub async fn chat<M>(
    State(state): State<AssistantAppState<M>>,
    Json(req): Json<ChatRequest>,
) -> AssistantResult<Json<ChatResponse>>
where
    M: ChatModel + Send + Sync + 'static,
{
    let reply = ChatUseCase::new(state.model.clone())
        .execute(&req.message, &req.history)
        .await?;
    Ok(Json(ChatResponse { reply }))
}
