//! Infrastructure layer for Parley.
//!
//! Contains implementations of the ports defined in `parley-core`:
//! HTTP adapters for the Gemini and Groq APIs, the SQLite chat metadata
//! repository, configuration loading, and environment credential lookup.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;
