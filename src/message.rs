// src/message.rs
use serde::{Deserialize, Serialize};

/// Reminder text pushed on every invocation.
pub const REMINDER_TEXT: &str = "習慣の時間です ⏰（テスト通知）";

/// Body of a LINE push call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushMessageRequest {
    pub to: String,
    pub messages: Vec<TextMessage>,
}

impl PushMessageRequest {
    /// A push carrying a single text message.
    pub fn text(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            messages: vec![TextMessage::new(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub success: bool,
}
