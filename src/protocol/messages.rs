//! Wire messages for the chat-completion endpoint.
//!
//! Requests follow the OpenAI-compatible shape accepted by OpenRouter.
//! Responses are decoded leniently: every field is optional, and the caller
//! decides which combination counts as a reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of the single message the dashboard sends.
pub const USER_ROLE: &str = "user";

/// Request body sent to the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// A request carrying one user prompt.
    pub fn user_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: USER_ROLE.to_string(),
                content: prompt.into(),
            }],
        }
    }
}

/// One message in a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response body returned by the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// One completion choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Message of a structured service error, if the body carries one.
    ///
    /// Services report either `{"error": {"message": ...}}` or a bare string.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        match error {
            Value::Null => None,
            Value::String(message) => Some(message.clone()),
            Value::Object(fields) => Some(match fields.get("message") {
                Some(Value::String(message)) if !message.is_empty() => message.clone(),
                _ => error.to_string(),
            }),
            other => Some(other.to_string()),
        }
    }

    /// Text of the first choice: its message content, else its `text` field.
    pub fn reply_text(&self) -> Option<&str> {
        let choice = self.choices.first()?;
        choice
            .message
            .as_ref()
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
            .or(choice.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}
