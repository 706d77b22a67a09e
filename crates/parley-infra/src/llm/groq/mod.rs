//! Groq wire format.
//!
//! - Endpoint: `POST {base}/openai/v1/chat/completions`
//! - Credential: `Authorization: Bearer`
//! - The optional instruction becomes a leading `system` message
//! - Reply: `choices[0].message.content`

pub mod types;

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use parley_observe::genai_attrs::PROVIDER_GROQ;
use parley_types::llm::ChatRequest;

use self::types::{GroqMessage, GroqRequest, GroqResponse};
use super::http::WireFormat;

/// Groq chat-completions request/response shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroqFormat;

impl WireFormat for GroqFormat {
    type Request = GroqRequest;
    type Response = GroqResponse;

    fn provider_name(&self) -> &'static str {
        PROVIDER_GROQ
    }

    fn path(&self, _model: &str) -> String {
        "/openai/v1/chat/completions".to_string()
    }

    fn authorize(&self, builder: RequestBuilder, api_key: &SecretString) -> RequestBuilder {
        builder.bearer_auth(api_key.expose_secret())
    }

    fn to_request(&self, model: &str, request: &ChatRequest) -> GroqRequest {
        let system = request.instruction.iter().map(|instruction| GroqMessage {
            role: "system".to_string(),
            content: instruction.clone(),
        });
        let turns = request.messages.iter().map(|msg| GroqMessage {
            role: msg.role.to_string(),
            content: msg.content.clone(),
        });

        GroqRequest {
            model: model.to_string(),
            messages: system.chain(turns).collect(),
            temperature: request.params.temperature,
            max_tokens: request.params.max_output_tokens,
        }
    }

    fn extract_reply(&self, response: GroqResponse) -> Option<String> {
        response.choices.into_iter().next()?.message?.content
    }
}
