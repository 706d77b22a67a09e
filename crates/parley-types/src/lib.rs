//! Shared domain types for Parley.
//!
//! Chat sessions and messages, model identifiers, provider request shapes,
//! configuration, and the error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
