//! In-memory session store.
//!
//! Maps session ids to ordered transcripts. Entirely volatile: nothing is
//! persisted and nothing is evicted. Shared across concurrent requests, so
//! all access goes through `DashMap`'s per-shard locks. Callers receive
//! cloned snapshots, never references into the map, so no lock outlives a
//! single method call (and none is ever held across an `.await`).

use dashmap::DashMap;

use parley_types::chat::{ChatMessage, MessageRole, Session};

/// Volatile transcript storage keyed by session id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Vec<ChatMessage>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session, registering an empty one if it does not exist.
    pub fn get_or_create(&self, session_id: &str) -> Session {
        let entry = self.sessions.entry(session_id.to_string()).or_default();
        Session {
            id: session_id.to_string(),
            messages: entry.value().clone(),
        }
    }

    /// Append one message, creating the session if absent.
    pub fn append(&self, session_id: &str, role: MessageRole, content: impl Into<String>) {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(ChatMessage::new(role, content));
    }

    /// Append a user message and the assistant's reply as one step.
    ///
    /// Both messages land adjacent even if another request appends to the
    /// same session concurrently.
    pub fn append_exchange(&self, session_id: &str, user: &str, reply: &str) {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();
        entry.push(ChatMessage::new(MessageRole::User, user));
        entry.push(ChatMessage::new(MessageRole::Assistant, reply));
    }

    /// Full transcript, oldest first. Empty for an unknown session.
    pub fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        self.sessions
            .get(session_id)
            .map(|messages| messages.value().clone())
            .unwrap_or_default()
    }

    /// Empty the transcript of an existing session. Unknown ids are ignored.
    pub fn clear(&self, session_id: &str) {
        if let Some(mut messages) = self.sessions.get_mut(session_id) {
            messages.clear();
        }
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
