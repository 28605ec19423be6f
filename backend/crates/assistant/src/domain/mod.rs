//! Domain Layer

pub mod message;
pub mod model;

pub use message::{ChatMessage, ChatRole, GREETING};
pub use model::ChatModel;
