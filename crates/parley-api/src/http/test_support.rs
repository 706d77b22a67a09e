//! Shared fixtures for handler tests.

use std::sync::Arc;

use tempfile::TempDir;

use parley_core::chat::service::ChatService;
use parley_core::llm::box_provider::BoxChatProvider;
use parley_core::llm::provider::ChatProvider;
use parley_infra::sqlite::chat::SqliteChatRepository;
use parley_infra::sqlite::pool::DatabasePool;
use parley_types::config::AppConfig;
use parley_types::llm::{ChatRequest, LlmError, ModelId};

use crate::state::AppState;

/// Replies with the last user message prefixed by "echo: ".
struct EchoProvider;

impl ChatProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo-1"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let last = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        Ok(format!("echo: {last}"))
    }
}

async fn state_with(service: ChatService) -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("chats.db").display());
    let pool = DatabasePool::new(&url).await.unwrap();

    let state = AppState {
        chat_service: Arc::new(service),
        chat_repo: Arc::new(SqliteChatRepository::new(pool)),
        config: Arc::new(AppConfig::default()),
        data_dir: dir.path().to_path_buf(),
    };
    (state, dir)
}

/// State whose Gemini slot is served by the echo provider; Groq is unavailable.
pub async fn state_with_echo() -> (AppState, TempDir) {
    let service =
        ChatService::new().with_provider(ModelId::Gemini, BoxChatProvider::new(EchoProvider));
    state_with(service).await
}

/// State with no credentials configured at all.
pub async fn state_without_providers() -> (AppState, TempDir) {
    state_with(ChatService::new()).await
}
