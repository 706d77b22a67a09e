//! Conversation HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/chat                       - Send a message, get a reply
//! - GET    /api/models                     - Model catalog with availability
//! - GET    /api/chat/history/{session_id}  - Full transcript
//! - DELETE /api/chat/clear/{session_id}    - Empty a transcript

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parley_types::chat::ChatMessage;
use parley_types::llm::ModelInfo;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub hinglish_mode: bool,
}

fn default_model() -> String {
    "gemini".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    pub model: String,
    pub hinglish_mode: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
pub struct History {
    pub history: Vec<ChatMessage>,
}

/// POST /api/chat
///
/// Provider failures are not HTTP errors: they come back as the reply text.
pub async fn send_message(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ApiResponse<ChatReply>>, AppError> {
    let start = Instant::now();
    let Json(body) = body?;

    if body.message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let session_id = body
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let response = state
        .chat_service
        .respond(&body.message, &session_id, &body.model, body.hinglish_mode)
        .await;

    let reply = ChatReply {
        response,
        session_id: session_id.clone(),
        model: body.model,
        hinglish_mode: body.hinglish_mode,
    };

    Ok(Json(
        ApiResponse::success(reply, start)
            .with_link("history", &format!("/api/chat/history/{session_id}")),
    ))
}

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Json<ApiResponse<ModelCatalog>> {
    let start = Instant::now();
    let catalog = ModelCatalog {
        models: state.chat_service.catalog(),
    };
    Json(ApiResponse::success(catalog, start))
}

/// GET /api/chat/history/{session_id}
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ApiResponse<History>> {
    let start = Instant::now();
    let history = History {
        history: state.chat_service.history(&session_id),
    };
    Json(ApiResponse::success(history, start))
}

/// DELETE /api/chat/clear/{session_id}
pub async fn clear_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ApiResponse<serde_json::Value>> {
    let start = Instant::now();
    state.chat_service.clear(&session_id);
    tracing::debug!(session_id = %session_id, "chat history cleared");

    Json(ApiResponse::success(
        serde_json::json!({"message": "Chat history cleared successfully"}),
        start,
    ))
}
