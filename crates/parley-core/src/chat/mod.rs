//! Chat sessions for Parley.
//!
//! - `store`: in-memory transcripts keyed by session id
//! - `service`: the `respond` / `history` / `clear` entry points
//! - `repository`: the persistence port for chat metadata

pub mod repository;
pub mod service;
pub mod store;
