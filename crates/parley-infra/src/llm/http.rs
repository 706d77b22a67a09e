//! HttpChatProvider -- the single reqwest-backed [`ChatProvider`].
//!
//! Everything provider-specific (endpoint path, where the credential goes,
//! request and response JSON shapes) lives behind the [`WireFormat`]
//! strategy. The call sequence, timeout, status handling, and error
//! mapping are shared, so the Gemini and Groq adapters cannot drift apart.
//!
//! The API key is wrapped in [`SecretString`] and is only exposed when
//! building the outgoing request.

use std::time::Duration;

use reqwest::RequestBuilder;
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::Instrument;

use parley_core::llm::provider::ChatProvider;
use parley_observe::genai_attrs::OP_CHAT;
use parley_types::llm::{ChatRequest, LlmError};

/// Default timeout for a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider-specific wire shape.
pub trait WireFormat: Send + Sync + 'static {
    /// JSON request body.
    type Request: Serialize + Send + Sync;
    /// JSON success body.
    type Response: DeserializeOwned + Send;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Path appended to the base URL.
    fn path(&self, model: &str) -> String;

    /// Attach the credential to the request.
    fn authorize(&self, builder: RequestBuilder, api_key: &SecretString) -> RequestBuilder;

    /// Translate the provider-agnostic request into this provider's body.
    fn to_request(&self, model: &str, request: &ChatRequest) -> Self::Request;

    /// Text of the first candidate, or `None` if there is none.
    fn extract_reply(&self, response: Self::Response) -> Option<String>;
}

/// Chat provider speaking one [`WireFormat`] over HTTP.
///
/// Does NOT derive Debug so the API key can never end up in logs.
pub struct HttpChatProvider<W: WireFormat> {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    format: W,
}

impl<W: WireFormat> HttpChatProvider<W> {
    /// Create a provider with the given timeout.
    ///
    /// `base_url` is scheme + host (e.g., "https://api.groq.com"); a trailing
    /// slash is ignored.
    pub fn new(
        format: W,
        api_key: SecretString,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            format,
        })
    }

    /// Full endpoint URL (without credentials).
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.format.path(&self.model))
    }

    async fn send(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let body = self.format.to_request(&self.model, request);

        let response = self
            .format
            .authorize(self.client.post(self.url()), &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(
                        status = status.as_u16(),
                        error = %err.without_url(),
                        "failed to read error body"
                    );
                    String::new()
                }
            };
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(transport_error)?;
        let parsed: W::Response = serde_json::from_str(&text)
            .map_err(|e| LlmError::Deserialization(e.to_string()))?;

        self.format
            .extract_reply(parsed)
            .ok_or(LlmError::EmptyResponse)
    }
}

/// Strip the URL before rendering: Gemini carries the key in the query string.
fn transport_error(err: reqwest::Error) -> LlmError {
    LlmError::Transport(err.without_url().to_string())
}

impl<W: WireFormat> ChatProvider for HttpChatProvider<W> {
    fn name(&self) -> &str {
        self.format.provider_name()
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let span = tracing::info_span!(
            "chat",
            otel.name = %format!("{OP_CHAT} {}", self.model),
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = self.format.provider_name(),
            gen_ai.request.model = %self.model,
            gen_ai.request.temperature = request.params.temperature,
            gen_ai.request.max_tokens = request.params.max_output_tokens,
        );

        let result = self.send(request).instrument(span.clone()).await;
        if let Err(ref err) = result {
            span.in_scope(|| tracing::debug!(error = %err, "provider call failed"));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    /// Minimal format used to exercise the shared call path.
    struct EchoFormat;

    #[derive(Serialize)]
    struct EchoRequest {
        prompt: String,
    }

    #[derive(Deserialize)]
    struct EchoResponse {
        #[serde(default)]
        replies: Vec<String>,
    }

    impl WireFormat for EchoFormat {
        type Request = EchoRequest;
        type Response = EchoResponse;

        fn provider_name(&self) -> &'static str {
            "echo"
        }

        fn path(&self, model: &str) -> String {
            format!("/echo/{model}")
        }

        fn authorize(&self, builder: RequestBuilder, api_key: &SecretString) -> RequestBuilder {
            use secrecy::ExposeSecret;
            builder.header("x-key", api_key.expose_secret())
        }

        fn to_request(&self, _model: &str, request: &ChatRequest) -> EchoRequest {
            EchoRequest {
                prompt: request
                    .messages
                    .last()
                    .map(|m| m.content.clone())
                    .unwrap_or_default(),
            }
        }

        fn extract_reply(&self, response: EchoResponse) -> Option<String> {
            response.replies.into_iter().next()
        }
    }

    fn provider(base_url: &str) -> HttpChatProvider<EchoFormat> {
        HttpChatProvider::new(
            EchoFormat,
            SecretString::from("k"),
            base_url,
            "m1",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn request() -> ChatRequest {
        parley_core::llm::context::build_request(&[], "ping", false)
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let p = provider("http://localhost:8080/");
        assert_eq!(p.url(), "http://localhost:8080/echo/m1");
        assert_eq!(p.name(), "echo");
        assert_eq!(p.model(), "m1");
    }

    #[tokio::test]
    async fn test_success_returns_first_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/echo/m1")
            .match_header("x-key", "k")
            .match_body(mockito::Matcher::Json(serde_json::json!({"prompt": "ping"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"replies":["pong","ignored"]}"#)
            .create_async()
            .await;

        let reply = provider(&server.url()).complete(&request()).await.unwrap();
        assert_eq!(reply, "pong");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_list_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/echo/m1")
            .with_status(200)
            .with_body(r#"{"replies":[]}"#)
            .create_async()
            .await;

        let err = provider(&server.url()).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_non_success_keeps_status_and_raw_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/echo/m1")
            .with_status(503)
            .with_body("upstream busy")
            .create_async()
            .await;

        let err = provider(&server.url()).complete(&request()).await.unwrap_err();
        match err {
            LlmError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream busy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_deserialization_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/echo/m1")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = provider(&server.url()).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1.
        let err = provider("http://127.0.0.1:1")
            .complete(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }

    #[tokio::test]
    async fn test_silent_server_times_out_after_one_attempt() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accepted = Arc::new(AtomicUsize::new(0));

        let counter = accepted.clone();
        let server = tokio::spawn(async move {
            // Accept and hold every connection open without ever replying.
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                held.push(socket);
            }
        });

        let provider = HttpChatProvider::new(
            EchoFormat,
            SecretString::from("k"),
            format!("http://{addr}"),
            "m1",
            Duration::from_secs(1),
        )
        .unwrap();

        let started = std::time::Instant::now();
        let err = provider.complete(&request()).await.unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, LlmError::Transport(_)), "unexpected error: {err:?}");
        assert!(elapsed >= Duration::from_millis(900), "returned too early: {elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "did not time out: {elapsed:?}");
        assert_eq!(accepted.load(Ordering::SeqCst), 1);

        server.abort();
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            // Promise 100 bytes, send 7, hang up.
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let err = provider(&format!("http://{addr}"))
            .complete(&request())
            .await
            .unwrap_err();
        match err {
            LlmError::Status { status, body } => {
                assert_eq!(status, 500);
                assert!(body.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }

        server.await.unwrap();
    }
}
