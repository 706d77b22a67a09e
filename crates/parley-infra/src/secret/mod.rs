//! Credential lookup for provider API keys.

pub mod env;

pub use env::EnvCredentialProvider;
