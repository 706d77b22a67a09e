//! Chat session, message, and chat metadata types for Parley.
//!
//! `Session` and `ChatMessage` model the volatile in-memory transcript.
//! `ChatRecord` is the persisted metadata row (id, title, timestamps);
//! it never carries message content.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export MessageRole from llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

use crate::llm::Message;

/// A single message within a session transcript.
///
/// `timestamp` is an opaque random token (UUID v4) generated when the
/// message is stored. It is a debug tag, not a time value: transcript
/// order is append order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a message with a freshly generated token.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Uuid::new_v4().to_string(),
        }
    }
}

impl From<&ChatMessage> for Message {
    fn from(msg: &ChatMessage) -> Self {
        Message {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

/// A conversation transcript keyed by an opaque session id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub messages: Vec<ChatMessage>,
}

/// Persisted chat metadata.
///
/// Serialized with camelCase keys to match what the web front end sends
/// and expects (`sessionId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecord {
    pub session_id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_tokens_are_unique() {
        let a = ChatMessage::new(MessageRole::User, "hi");
        let b = ChatMessage::new(MessageRole::User, "hi");
        assert_ne!(a.timestamp, b.timestamp);
        assert!(Uuid::parse_str(&a.timestamp).is_ok());
    }

    #[test]
    fn test_chat_message_json_shape() {
        let msg = ChatMessage::new(MessageRole::Assistant, "Hi there");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "Hi there");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_chat_record_uses_camel_case() {
        let record = ChatRecord {
            session_id: "abc".to_string(),
            title: "Chat".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sessionId"], "abc");
        assert!(json.get("session_id").is_none());
    }

    #[test]
    fn test_message_from_chat_message() {
        let stored = ChatMessage::new(MessageRole::User, "Hello");
        let msg = Message::from(&stored);
        assert_eq!(msg, Message::user("Hello"));
    }
}
