//! HTTP/REST API layer for Parley.
//!
//! Axum-based JSON API under `/api/` with an envelope response format,
//! permissive CORS, and optional static serving of the web front end.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;
