//! Generative-model port consumed by the advice service.

use async_trait::async_trait;
use thiserror::Error;

/// Text-generation capability.
///
/// Implementations own credentials, transport, and rate limiting; the
/// advice service only ever sees rendered prompts and returned text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generates a completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerativeClientError`] when the capability is not
    /// available or the generation request fails.
    async fn generate(&self, prompt: &str) -> Result<String, GenerativeClientError>;
}

/// Errors returned by generative client implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerativeClientError {
    /// No generative capability is configured.
    #[error("generative capability is not available")]
    Unavailable,

    /// The generation request failed.
    #[error("generation failed: {0}")]
    Failed(String),
}
