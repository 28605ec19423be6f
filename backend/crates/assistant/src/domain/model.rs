//! Language model seam

use crate::domain::message::ChatMessage;
use crate::error::AssistantResult;

/// A backend that continues a conversation
#[trait_variant::make(ChatModel: Send)]
pub trait LocalChatModel {
    /// Reply to `message` given the earlier turns. `Ok(None)` means the
    /// backend answered with no text.
    async fn reply(&self, history: &[ChatMessage], message: &str) -> AssistantResult<Option<String>>;
}
