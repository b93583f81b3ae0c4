use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{CompletionParams, LlmClient, LlmClientError};

/// Scripted client: replays queued replies in order, then falls back to a
/// default reply. Every prompt it receives is recorded.
pub struct MockLlmClient {
    replies: Mutex<VecDeque<Result<String, LlmClientError>>>,
    default_reply: String,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::with_replies(Vec::new())
    }

    pub fn with_replies(replies: Vec<Result<String, LlmClientError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            default_reply: "[]".to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_replies(vec![Ok(reply.into())])
    }

    pub fn failing(error: LlmClientError) -> Self {
        Self::with_replies(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        prompt: &str,
        _params: &CompletionParams,
    ) -> Result<String, LlmClientError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let next = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front());

        next.unwrap_or_else(|| Ok(self.default_reply.clone()))
    }
}
