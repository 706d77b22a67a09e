//! ChatRepository trait definition.
//!
//! Persistence port for chat metadata (session id, title, timestamps).
//! Message content is never persisted; it lives only in the
//! [`SessionStore`](super::store::SessionStore).

use parley_types::chat::ChatRecord;
use parley_types::error::RepositoryError;

/// Repository trait for chat metadata persistence.
///
/// Implementations live in parley-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// List all chats, oldest first.
    fn list_chats(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatRecord>, RepositoryError>> + Send;

    /// Create a chat record.
    ///
    /// A missing `session_id` gets a fresh random id; a missing `title` gets
    /// a dated default. Fails with `Conflict` if the id already exists.
    fn create_chat(
        &self,
        session_id: Option<&str>,
        title: Option<&str>,
    ) -> impl std::future::Future<Output = Result<ChatRecord, RepositoryError>> + Send;

    /// Rename a chat and bump its `updated_at`.
    ///
    /// Renaming an unknown id changes nothing and is not an error.
    fn rename_chat(
        &self,
        session_id: &str,
        title: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a chat record. Unknown ids are ignored.
    fn delete_chat(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
