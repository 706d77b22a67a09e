//! SQLite chat metadata repository implementation.
//!
//! Implements `ChatRepository` from `parley-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, reads on the reader
//! pool and writes on the writer pool.

use chrono::{Local, Utc};
use sqlx::Row;
use uuid::Uuid;

use parley_core::chat::repository::ChatRepository;
use parley_types::chat::ChatRecord;
use parley_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatRecord.
struct ChatRow {
    session_id: String,
    title: String,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            session_id: row.try_get("session_id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_record(self) -> ChatRecord {
        ChatRecord {
            session_id: self.session_id,
            title: self.title,
            created_at: self.created_at.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
        }
    }
}

/// Title used when a chat is created without one, e.g. "Chat 2024-05-01 14:03".
fn default_title() -> String {
    format!("Chat {}", Local::now().format("%Y-%m-%d %H:%M"))
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

fn map_write_error(err: sqlx::Error, session_id: &str) -> RepositoryError {
    let unique = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());
    if unique {
        RepositoryError::Conflict(format!("chat '{session_id}' already exists"))
    } else {
        RepositoryError::Query(err.to_string())
    }
}

impl ChatRepository for SqliteChatRepository {
    async fn list_chats(&self) -> Result<Vec<ChatRecord>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT session_id, title, created_at, updated_at FROM chats ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                ChatRow::from_row(row)
                    .map(ChatRow::into_record)
                    .map_err(|e| RepositoryError::Query(e.to_string()))
            })
            .collect()
    }

    async fn create_chat(
        &self,
        session_id: Option<&str>,
        title: Option<&str>,
    ) -> Result<ChatRecord, RepositoryError> {
        let session_id = session_id
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let title = title
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_title);
        let now = now_rfc3339();

        sqlx::query(
            "INSERT INTO chats (session_id, title, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&session_id)
        .bind(&title)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| map_write_error(e, &session_id))?;

        tracing::debug!(session_id = %session_id, "chat created");

        Ok(ChatRecord {
            session_id,
            title,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn rename_chat(&self, session_id: &str, title: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE chats SET title = ?, updated_at = ? WHERE session_id = ?")
            .bind(title)
            .bind(now_rfc3339())
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            tracing::debug!(session_id, "rename of unknown chat ignored");
        }
        Ok(())
    }

    async fn delete_chat(&self, session_id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM chats WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(())
    }
}
