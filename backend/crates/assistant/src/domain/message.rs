//! Chat turns

use serde::{Deserialize, Serialize};

/// Opening turn shown before the user types anything
pub const GREETING: &str = "สวัสดีค่ะ หนูชื่อ \"สาวน้อย\" ยินดีที่ได้รู้จักนะคะ มีอะไรให้ช่วยเกี่ยวกับระบบทะเบียนหนังสือรับรอง หรืออยากทราบขั้นตอนการขอเอกสาร สอบถามรายละเอียดได้เลยค่ะ!";

/// Who said it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    pub fn greeting() -> Self {
        Self::model(GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let turn: ChatMessage = serde_json::from_str(r#"{"role":"model","text":"hi"}"#).unwrap();
        assert_eq!(turn, ChatMessage::model("hi"));
        assert_eq!(serde_json::to_value(ChatRole::User).unwrap(), "user");
        assert!(serde_json::from_str::<ChatRole>("\"assistant\"").is_err());
    }

    #[test]
    fn test_greeting_is_a_model_turn() {
        let greeting = ChatMessage::greeting();
        assert_eq!(greeting.role, ChatRole::Model);
        assert!(greeting.text.contains("สาวน้อย"));
    }
}
