//! Google Gemini wire format.
//!
//! - Endpoint: `POST {base}/v1/models/{model}:generateContent`
//! - Credential: `?key=` query parameter
//! - Roles: `user` / `model`; the optional instruction becomes a leading
//!   `user` turn (the v1 endpoint has no system slot)
//! - Reply: `candidates[0].content.parts[0].text`

pub mod types;

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use parley_observe::genai_attrs::PROVIDER_GEMINI;
use parley_types::llm::{ChatRequest, MessageRole};

use self::types::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};
use super::http::WireFormat;

/// Gemini `generateContent` request/response shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiFormat;

fn content(role: &str, text: &str) -> GeminiContent {
    GeminiContent {
        role: role.to_string(),
        parts: vec![GeminiPart {
            text: text.to_string(),
        }],
    }
}

impl WireFormat for GeminiFormat {
    type Request = GeminiRequest;
    type Response = GeminiResponse;

    fn provider_name(&self) -> &'static str {
        PROVIDER_GEMINI
    }

    fn path(&self, model: &str) -> String {
        format!("/v1/models/{model}:generateContent")
    }

    fn authorize(&self, builder: RequestBuilder, api_key: &SecretString) -> RequestBuilder {
        builder.query(&[("key", api_key.expose_secret())])
    }

    fn to_request(&self, _model: &str, request: &ChatRequest) -> GeminiRequest {
        let mut contents = Vec::with_capacity(request.messages.len() + 1);

        if let Some(ref instruction) = request.instruction {
            contents.push(content("user", instruction));
        }

        for msg in &request.messages {
            let role = match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            contents.push(content(role, &msg.content));
        }

        GeminiRequest {
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: request.params.temperature,
                max_output_tokens: request.params.max_output_tokens,
                top_p: request.params.top_p,
                top_k: request.params.top_k,
            },
        }
    }

    fn extract_reply(&self, response: GeminiResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use mockito::Matcher;
    use serde_json::json;

    use parley_core::llm::context::{HINGLISH_INSTRUCTION, build_request};
    use parley_core::llm::provider::ChatProvider;
    use parley_types::chat::ChatMessage;
    use parley_types::llm::LlmError;

    use crate::llm::http::HttpChatProvider;

    const PATH: &str = "/v1/models/gemini-1.5-flash:generateContent";

    fn provider(base_url: &str) -> HttpChatProvider<GeminiFormat> {
        HttpChatProvider::new(
            GeminiFormat,
            SecretString::from("test-key"),
            base_url,
            "gemini-1.5-flash",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_request_maps_roles_and_params() {
        let history = vec![
            ChatMessage::new(MessageRole::User, "Hi"),
            ChatMessage::new(MessageRole::Assistant, "Hello!"),
        ];
        let request = build_request(&history, "How are you?", false);
        let body = serde_json::to_value(GeminiFormat.to_request("m", &request)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "Hi"}]},
                    {"role": "model", "parts": [{"text": "Hello!"}]},
                    {"role": "user", "parts": [{"text": "How are you?"}]}
                ],
                "generationConfig": {
                    "temperature": 0.7,
                    "maxOutputTokens": 1000,
                    "topP": 0.8,
                    "topK": 40
                }
            })
        );
    }

    #[test]
    fn test_instruction_is_leading_user_turn() {
        let request = build_request(&[], "kya haal hai", true);
        let body = GeminiFormat.to_request("m", &request);
        assert_eq!(body.contents.len(), 2);
        assert_eq!(body.contents[0].role, "user");
        assert_eq!(body.contents[0].parts[0].text, HINGLISH_INSTRUCTION);
        assert_eq!(body.contents[1].parts[0].text, "kya haal hai");
    }

    #[test]
    fn test_extract_reply_handles_missing_pieces() {
        let parse = |s: &str| serde_json::from_str::<GeminiResponse>(s).unwrap();
        assert_eq!(
            GeminiFormat.extract_reply(parse(
                r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}},{"content":{"parts":[{"text":"c"}]}}]}"#
            )),
            Some("a".to_string())
        );
        assert_eq!(GeminiFormat.extract_reply(parse("{}")), None);
        assert_eq!(GeminiFormat.extract_reply(parse(r#"{"candidates":[]}"#)), None);
        assert_eq!(
            GeminiFormat.extract_reply(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)),
            None
        );
    }

    #[tokio::test]
    async fn test_success_with_key_in_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": {"temperature": 0.7, "maxOutputTokens": 1000}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi there"}]}}]}"#)
            .create_async()
            .await;

        let reply = provider(&server.url())
            .complete(&build_request(&[], "Hello", false))
            .await
            .unwrap();
        assert_eq!(reply, "Hi there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_zero_candidates_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let err = provider(&server.url())
            .complete(&build_request(&[], "Hello", false))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("server error")
            .create_async()
            .await;

        let err = provider(&server.url())
            .complete(&build_request(&[], "Hello", false))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: server error");
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_key() {
        let err = provider("http://127.0.0.1:1")
            .complete(&build_request(&[], "Hello", false))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
        assert!(!err.to_string().contains("test-key"));
    }
}
