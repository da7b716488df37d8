//! Scripted `TextCompletionService` for tests: replays queued replies in order
//! and records every request it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionRequest, LlmError, TextCompletionService};

/// A request as seen by the fake, with owned strings.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_output: bool,
}

#[derive(Default)]
pub struct ScriptedCompletionService {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, error: LlmError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Shorthand for a 503 from the provider.
    pub fn unavailable(self) -> Self {
        self.fail(LlmError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletionService for ScriptedCompletionService {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            prompt: request.prompt.to_string(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            json_output: request.json_output,
        });

        // An exhausted script behaves like an unreachable provider.
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::Api {
                status: 599,
                message: "no scripted reply left".to_string(),
            }))
    }
}
