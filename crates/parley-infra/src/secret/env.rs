//! Environment variable credential provider.
//!
//! Each model has one named variable:
//! - `gemini` -> `GOOGLE_API_KEY`
//! - `groq`   -> `GROQ_API_KEY`
//!
//! Unset and empty variables both mean "no credential". Values are wrapped
//! in [`SecretString`] immediately and never logged.
//!
//! A `.env` file in the working directory (or a parent) is loaded into the
//! process environment by [`load_dotenv`]. Variables already exported win.

use std::path::PathBuf;

use secrecy::SecretString;

use parley_types::llm::ModelId;

/// Environment variable holding the API key for `model`.
pub fn credential_var(model: ModelId) -> &'static str {
    match model {
        ModelId::Gemini => "GOOGLE_API_KEY",
        ModelId::Groq => "GROQ_API_KEY",
    }
}

/// Load `.env` into the process environment, if one is found.
///
/// Must run before any credential lookup and before worker threads start.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => {
            // Logging is not initialized yet at this point.
            eprintln!("Warning: failed to load .env: {err}");
            None
        }
    }
}

/// Resolve the API key for `model` through `lookup` (variable name -> value).
pub fn resolve_api_key(
    model: ModelId,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<SecretString> {
    lookup(credential_var(model))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(SecretString::from)
}

/// Read-only credential provider backed by the process environment.
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self
    }

    /// API key for `model`, if its variable is set and non-empty.
    pub fn api_key(&self, model: ModelId) -> Option<SecretString> {
        // Non-Unicode values are treated as absent.
        resolve_api_key(model, |name| std::env::var(name).ok())
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}
