//! LLM request types for Parley.
//!
//! These types model the provider-agnostic side of a completion call: which
//! model is selected, the conversation turns sent, the fixed generation
//! parameters, and the errors a provider call can produce.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in a conversation transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with every completion request.
///
/// `top_p` and `top_k` are only honored by providers whose wire format
/// has a place for them (Gemini); others ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1000,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

/// Provider-agnostic completion request.
///
/// `instruction` is an optional leading directive placed before the
/// conversation turns; each wire format decides how to express it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    pub messages: Vec<Message>,
    pub params: GenerationParams,
}

/// Identifier of a supported backend model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    Gemini,
    Groq,
}

impl ModelId {
    /// Every supported model, in catalog order.
    pub const ALL: [ModelId; 2] = [ModelId::Gemini, ModelId::Groq];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gemini => "gemini",
            ModelId::Groq => "groq",
        }
    }

    /// Human-facing provider name (used in error replies and the catalog).
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gemini => "Gemini",
            ModelId::Groq => "Groq",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ModelId::Gemini),
            "groq" => Ok(ModelId::Groq),
            other => Err(format!("unknown model: '{other}'")),
        }
    }
}

/// Catalog entry describing a model and whether it can be used right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: ModelId,
    pub name: String,
    pub description: String,
    pub available: bool,
}

impl ModelInfo {
    pub fn new(id: ModelId, available: bool) -> Self {
        let (name, description) = match id {
            ModelId::Gemini => ("Google Gemini", "Google's latest AI model"),
            ModelId::Groq => ("Groq LLM", "Fast inference with Groq"),
        };
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            available,
        }
    }
}

/// Errors from a single provider call.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Success status, but no candidate/choice carried any text.
    #[error("provider returned no candidates")]
    EmptyResponse,

    /// The request could not be sent or timed out.
    #[error("{0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Deserialization(String),
}
