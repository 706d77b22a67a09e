//! Business logic and port definitions for Parley.
//!
//! This crate owns the volatile session store, the provider-agnostic
//! request builder, and the chat service that ties them together. It
//! defines the traits (ports) the infrastructure layer implements and
//! depends only on `parley-types` -- never on `parley-infra` or any
//! database/IO crate.

pub mod chat;
pub mod llm;
