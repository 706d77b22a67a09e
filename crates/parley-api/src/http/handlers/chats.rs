//! Chat metadata HTTP handlers (sidebar list of saved chats).
//!
//! Endpoints:
//! - GET    /api/chats               - List chats, oldest first
//! - POST   /api/chats               - Create a chat
//! - PATCH  /api/chats/{session_id}  - Rename a chat
//! - DELETE /api/chats/{session_id}  - Delete a chat
//!
//! Only metadata lives here; transcripts stay in the in-memory session store.

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use parley_core::chat::repository::ChatRepository;
use parley_types::chat::ChatRecord;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatBody {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameChatBody {
    #[serde(default)]
    pub title: Option<String>,
}

/// `{sessionId, title}` as the front end expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub session_id: String,
    pub title: String,
}

impl From<ChatRecord> for ChatSummary {
    fn from(record: ChatRecord) -> Self {
        Self {
            session_id: record.session_id,
            title: record.title,
        }
    }
}

/// GET /api/chats
pub async fn list_chats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChatSummary>>>, AppError> {
    let start = Instant::now();
    let chats = state.chat_repo.list_chats().await?;
    let summaries = chats.into_iter().map(ChatSummary::from).collect();
    Ok(Json(ApiResponse::success(summaries, start)))
}

/// POST /api/chats
///
/// An absent body is treated like `{}`.
pub async fn create_chat(
    State(state): State<AppState>,
    body: Option<Json<CreateChatBody>>,
) -> Result<Json<ApiResponse<ChatSummary>>, AppError> {
    let start = Instant::now();
    let body = body.map(|Json(body)| body).unwrap_or_default();

    let record = state
        .chat_repo
        .create_chat(body.session_id.as_deref(), body.title.as_deref())
        .await?;

    let href = format!("/api/chats/{}", record.session_id);
    Ok(Json(
        ApiResponse::success(ChatSummary::from(record), start).with_link("self", &href),
    ))
}

/// PATCH /api/chats/{session_id}
pub async fn rename_chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: Result<Json<RenameChatBody>, JsonRejection>,
) -> Result<Json<ApiResponse<ChatSummary>>, AppError> {
    let start = Instant::now();
    let Json(body) = body?;

    let title = body
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;

    state.chat_repo.rename_chat(&session_id, &title).await?;

    Ok(Json(ApiResponse::success(
        ChatSummary { session_id, title },
        start,
    )))
}

/// DELETE /api/chats/{session_id}
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    state.chat_repo.delete_chat(&session_id).await?;
    Ok(Json(ApiResponse::success(
        serde_json::json!({"deleted": true}),
        start,
    )))
}
