//! LLM provider abstractions for Parley.
//!
//! - `ChatProvider`: RPITIT trait for concrete provider implementations
//! - `BoxChatProvider`: object-safe wrapper for dynamic dispatch
//! - `context`: builds the bounded request sent to a provider

pub mod box_provider;
pub mod context;
pub mod provider;
