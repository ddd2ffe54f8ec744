// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One turn in the conversation. Fields are private so a message cannot be
/// edited after it has been added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response body returned by `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Logs details of each chat service call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: Option<u16>,
    pub response_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_serializes_lowercase_sender() {
        let value = serde_json::to_value(Message::user("Tokyo")).unwrap();
        assert_eq!(value, json!({ "text": "Tokyo", "sender": "user" }));

        let value = serde_json::to_value(Message::bot("22°C")).unwrap();
        assert_eq!(value["sender"], "bot");
    }

    #[test]
    fn test_chat_request_body_shape() {
        let body = serde_json::to_value(ChatRequest { message: "Paris" }).unwrap();
        assert_eq!(body, json!({ "message": "Paris" }));
    }

    #[test]
    fn test_chat_response_ignores_extra_fields() {
        let parsed: ChatResponse =
            serde_json::from_value(json!({ "response": "18°C in Paris", "extra": 1 })).unwrap();
        assert_eq!(parsed.response, "18°C in Paris");
    }
}
