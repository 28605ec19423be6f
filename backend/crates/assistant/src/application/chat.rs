//! Chat Use Case
//!
//! One user turn in, one model turn out. Backend trouble becomes a fixed
//! apology so the conversation can go on.

use std::sync::Arc;

use crate::domain::message::ChatMessage;
use crate::domain::model::ChatModel;
use crate::error::{AssistantError, AssistantResult};

/// Reply when the backend answered with no text
pub const EMPTY_REPLY: &str = "ขออภัย ระบบขัดข้อง กรุณาลองใหม่ภายหลัง";
/// Reply when the backend could not be reached or refused
pub const CONNECTION_REPLY: &str = "เกิดข้อผิดพลาดในการเชื่อมต่อกับ AI";

pub struct ChatUseCase<M>
where
    M: ChatModel,
{
    model: Arc<M>,
}

impl<M> ChatUseCase<M>
where
    M: ChatModel,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Fails only for a blank message
    pub async fn execute(&self, message: &str, history: &[ChatMessage]) -> AssistantResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        match self.model.reply(history, message).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => {
                tracing::warn!("Assistant returned no text");
                Ok(EMPTY_REPLY.to_string())
            }
            Err(e) => {
                e.log();
                Ok(CONNECTION_REPLY.to_string())
            }
        }
    }
}
