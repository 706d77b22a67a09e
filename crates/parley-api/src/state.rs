//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the REST API. The chat service is configured with one provider per model
//! that has a credential; models without one simply stay unavailable.

use std::path::PathBuf;
use std::sync::Arc;

use parley_core::chat::service::ChatService;
use parley_infra::config::{load_config, resolve_data_dir};
use parley_infra::llm::create_provider;
use parley_infra::secret::EnvCredentialProvider;
use parley_infra::sqlite::chat::SqliteChatRepository;
use parley_infra::sqlite::pool::{DatabasePool, default_database_url};
use parley_types::config::AppConfig;
use parley_types::llm::ModelId;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub chat_repo: Arc<SqliteChatRepository>,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load config, open the database, and wire
    /// the chat service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let chat_service = build_chat_service(&config, &EnvCredentialProvider::new())?;

        let db_pool = DatabasePool::new(&default_database_url(&data_dir)).await?;
        let chat_repo = SqliteChatRepository::new(db_pool);

        Ok(Self {
            chat_service: Arc::new(chat_service),
            chat_repo: Arc::new(chat_repo),
            config: Arc::new(config),
            data_dir,
        })
    }
}

/// Build a chat service with a provider for every model that has a key.
pub fn build_chat_service(
    config: &AppConfig,
    credentials: &EnvCredentialProvider,
) -> anyhow::Result<ChatService> {
    let mut service = ChatService::new();

    for model in ModelId::ALL {
        match credentials.api_key(model) {
            Some(api_key) => {
                let provider = create_provider(model, config, api_key)?;
                service = service.with_provider(model, provider);
            }
            None => {
                tracing::warn!(model = %model, "no API key configured, model unavailable");
            }
        }
    }

    Ok(service)
}
