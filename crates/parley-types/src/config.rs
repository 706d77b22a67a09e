//! Application configuration types for Parley.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

use crate::llm::ModelId;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";
const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gemini: ProviderSettings,

    #[serde(default)]
    pub groq: ProviderSettings,

    #[serde(default)]
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Settings section for the given model.
    pub fn provider(&self, model: ModelId) -> &ProviderSettings {
        match model {
            ModelId::Gemini => &self.gemini,
            ModelId::Groq => &self.groq,
        }
    }

    /// Upstream model name, falling back to the built-in default.
    pub fn model_name(&self, model: ModelId) -> String {
        self.provider(model).model.clone().unwrap_or_else(|| {
            match model {
                ModelId::Gemini => DEFAULT_GEMINI_MODEL,
                ModelId::Groq => DEFAULT_GROQ_MODEL,
            }
            .to_string()
        })
    }

    /// API base URL (scheme + host, no trailing slash).
    pub fn base_url(&self, model: ModelId) -> String {
        let url = self.provider(model).base_url.clone().unwrap_or_else(|| {
            match model {
                ModelId::Gemini => DEFAULT_GEMINI_BASE_URL,
                ModelId::Groq => DEFAULT_GROQ_BASE_URL,
            }
            .to_string()
        });
        url.trim_end_matches('/').to_string()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Per-provider overrides. `None` means "use the built-in default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub base_url: Option<String>,
}

/// Outbound call settings shared by all providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Hard timeout for a single provider call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}
