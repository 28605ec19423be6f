//! Conversational Assistant Backend Module
//!
//! - `domain/` - Chat turns and the model seam
//! - `application/` - Chat use case with its fallback replies
//! - `infra/` - Gemini `generateContent` client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! The assistant keeps no state; the caller sends the whole conversation
//! with every message.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AssistantConfig;
pub use error::{AssistantError, AssistantResult};
pub use infra::gemini::GeminiClient;
pub use presentation::router::assistant_router;

pub mod models {
    pub use crate::domain::message::*;
    pub use crate::presentation::dto::*;
}
