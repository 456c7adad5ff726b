//! Scripted generative client for advice tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::advisor::ports::{GenerativeClient, GenerativeClientError};

/// Generative client that replays scripted responses in order.
///
/// Each [`generate`](GenerativeClient::generate) call consumes the next
/// scripted outcome and records the prompt it was given; an exhausted
/// script reports the capability as unavailable.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGenerativeClient {
    state: Arc<Mutex<ScriptedState>>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    responses: VecDeque<Result<String, GenerativeClientError>>,
    prompts: Vec<String>,
}

impl ScriptedGenerativeClient {
    /// Creates a client with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion.
    pub fn push_response(&self, response: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.responses.push_back(Ok(response.into()));
        }
    }

    /// Queues a failure outcome.
    pub fn push_error(&self, error: GenerativeClientError) {
        if let Ok(mut state) = self.state.lock() {
            state.responses.push_back(Err(error));
        }
    }

    /// Returns the prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedGenerativeClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerativeClientError> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| GenerativeClientError::Failed(err.to_string()))?;
        state.prompts.push(prompt.to_owned());
        state
            .responses
            .pop_front()
            .unwrap_or(Err(GenerativeClientError::Unavailable))
    }
}
