//! Groq chat-completions API types (OpenAI-compatible shape).

use serde::{Deserialize, Serialize};

/// Request body for `/openai/v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct GroqRequest {
    pub model: String,
    pub messages: Vec<GroqMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Roles: `system`, `user`, `assistant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroqMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqResponse {
    #[serde(default)]
    pub choices: Vec<GroqChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqChoice {
    #[serde(default)]
    pub message: Option<GroqChoiceMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroqChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
