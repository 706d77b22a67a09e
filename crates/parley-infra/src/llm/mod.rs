//! HTTP chat providers.
//!
//! One shared [`HttpChatProvider`](http::HttpChatProvider) parameterized by a
//! per-vendor [`WireFormat`](http::WireFormat). [`create_provider`] picks the
//! format from the model id and applies the configured model name, base URL,
//! and timeout.

pub mod gemini;
pub mod groq;
pub mod http;

use std::time::Duration;

use secrecy::SecretString;

use parley_core::llm::box_provider::BoxChatProvider;
use parley_types::config::AppConfig;
use parley_types::llm::{LlmError, ModelId};

use self::gemini::GeminiFormat;
use self::groq::GroqFormat;
use self::http::HttpChatProvider;

/// Build the provider serving `model`.
pub fn create_provider(
    model: ModelId,
    config: &AppConfig,
    api_key: SecretString,
) -> Result<BoxChatProvider, LlmError> {
    let base_url = config.base_url(model);
    let model_name = config.model_name(model);
    let timeout = Duration::from_secs(config.generation.timeout_secs);

    let provider = match model {
        ModelId::Gemini => BoxChatProvider::new(HttpChatProvider::new(
            GeminiFormat,
            api_key,
            base_url,
            model_name,
            timeout,
        )?),
        ModelId::Groq => BoxChatProvider::new(HttpChatProvider::new(
            GroqFormat, api_key, base_url, model_name, timeout,
        )?),
    };

    tracing::debug!(model = %model, upstream = provider.model(), "provider configured");
    Ok(provider)
}
