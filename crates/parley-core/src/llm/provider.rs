//! ChatProvider trait definition.
//!
//! This is the core abstraction that every backend model implements.
//! Uses RPITIT for `complete`; `BoxChatProvider` adds dynamic dispatch.

use parley_types::llm::{ChatRequest, LlmError};

/// Trait for LLM provider backends (Gemini, Groq).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parley-infra (e.g., `HttpChatProvider<GeminiFormat>`).
pub trait ChatProvider: Send + Sync {
    /// Provider name (e.g., "gemini", "groq").
    fn name(&self) -> &str;

    /// Upstream model name sent to the provider (e.g., "gemini-1.5-flash").
    fn model(&self) -> &str;

    /// Send one completion request and return the first candidate's text.
    ///
    /// Exactly one outbound call; no retries.
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
