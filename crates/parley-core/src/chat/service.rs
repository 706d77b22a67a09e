//! Chat service: the entry point the HTTP layer talks to.
//!
//! Selects a provider, builds the bounded request from the session
//! transcript, makes one call, and records the exchange only when a reply
//! actually came back. `respond` never fails: every error becomes a
//! human-readable reply string.

use std::collections::HashMap;

use parley_types::chat::ChatMessage;
use parley_types::llm::{LlmError, ModelId, ModelInfo};

use super::store::SessionStore;
use crate::llm::box_provider::BoxChatProvider;
use crate::llm::context::build_request;

/// Reply when the selected model is unknown or has no credential.
pub const MODEL_UNAVAILABLE_REPLY: &str =
    "Sorry, the selected model is not available. Please check your API keys.";

/// Reply when the provider succeeded but produced no candidate.
pub const EMPTY_RESPONSE_REPLY: &str = "Sorry, I couldn't generate a response.";

/// Owns the session store and the configured providers.
pub struct ChatService {
    store: SessionStore,
    providers: HashMap<ModelId, BoxChatProvider>,
}

impl ChatService {
    /// Create a service with no providers configured.
    pub fn new() -> Self {
        Self {
            store: SessionStore::new(),
            providers: HashMap::new(),
        }
    }

    /// Register the provider serving `model`, replacing any previous one.
    pub fn with_provider(mut self, model: ModelId, provider: BoxChatProvider) -> Self {
        self.providers.insert(model, provider);
        self
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Get a reply for `message` in `session_id` from `model`.
    ///
    /// The caller guarantees `message` is non-empty. On success the user
    /// message and the reply are appended to the transcript; on any failure
    /// the transcript is left untouched.
    pub async fn respond(
        &self,
        message: &str,
        session_id: &str,
        model: &str,
        hinglish_mode: bool,
    ) -> String {
        let Some((model_id, provider)) = self.resolve(model) else {
            tracing::info!(model, session_id, "model not available");
            return MODEL_UNAVAILABLE_REPLY.to_string();
        };

        let session = self.store.get_or_create(session_id);
        let request = build_request(&session.messages, message, hinglish_mode);

        tracing::debug!(
            session_id,
            model = %model_id,
            history_len = session.messages.len(),
            sent_len = request.messages.len(),
            hinglish_mode,
            "sending chat request"
        );

        match provider.complete(&request).await {
            Ok(reply) => {
                self.store.append_exchange(session_id, message, &reply);
                tracing::info!(session_id, model = %model_id, reply_len = reply.len(), "chat reply recorded");
                reply
            }
            Err(err) => {
                tracing::warn!(session_id, model = %model_id, error = %err, "chat request failed");
                error_reply(model_id, &err)
            }
        }
    }

    /// Full transcript for a session, oldest first.
    pub fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        self.store.history(session_id)
    }

    /// Empty a session's transcript. Unknown ids are ignored.
    pub fn clear(&self, session_id: &str) {
        self.store.clear(session_id);
    }

    /// Models with a configured credential, in catalog order.
    pub fn available_models(&self) -> Vec<ModelId> {
        ModelId::ALL
            .into_iter()
            .filter(|id| self.providers.contains_key(id))
            .collect()
    }

    /// Every known model with its availability.
    pub fn catalog(&self) -> Vec<ModelInfo> {
        ModelId::ALL
            .into_iter()
            .map(|id| ModelInfo::new(id, self.providers.contains_key(&id)))
            .collect()
    }

    fn resolve(&self, model: &str) -> Option<(ModelId, &BoxChatProvider)> {
        let id: ModelId = model.parse().ok()?;
        self.providers.get(&id).map(|provider| (id, provider))
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a provider failure as the reply text shown to the user.
fn error_reply(model: ModelId, err: &LlmError) -> String {
    match err {
        LlmError::EmptyResponse => EMPTY_RESPONSE_REPLY.to_string(),
        LlmError::Status { status, body } => format!("API Error: {status} - {body}"),
        LlmError::Transport(_) | LlmError::Deserialization(_) => {
            format!("Error calling {} API: {err}", model.display_name())
        }
    }
}
