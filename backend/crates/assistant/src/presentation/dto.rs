//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::message::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
