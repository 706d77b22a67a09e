//! OpenTelemetry GenAI Semantic Convention values.
//!
//! Provider-call spans carry the convention's field names directly
//! (`gen_ai.operation.name`, `gen_ai.provider.name`, `gen_ai.request.model`,
//! `gen_ai.request.temperature`, `gen_ai.request.max_tokens`); this module
//! holds the values those fields take so every adapter reports the same
//! strings. Span naming convention: `"{operation} {model}"`
//! (e.g., `"chat gemini-1.5-flash"`).

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

/// Gemini provider identifier.
pub const PROVIDER_GEMINI: &str = "gemini";

/// Groq provider identifier.
pub const PROVIDER_GROQ: &str = "groq";
