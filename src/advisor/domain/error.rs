//! Error types for the advice capability.

use crate::advisor::ports::GenerativeClientError;
use thiserror::Error;

/// Errors returned by the advice service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdvisorError {
    /// The advice query is empty after trimming.
    #[error("advice query must not be empty")]
    EmptyQuery,

    /// A prompt template failed to render.
    #[error("failed to render advice prompt: {reason}")]
    TemplateRender {
        /// Description of the rendering failure.
        reason: String,
    },

    /// The generative capability failed.
    #[error(transparent)]
    Generative(#[from] GenerativeClientError),
}
