//! Application Layer

pub mod chat;
pub mod config;

pub use chat::{CONNECTION_REPLY, ChatUseCase, EMPTY_REPLY};
pub use config::AssistantConfig;
