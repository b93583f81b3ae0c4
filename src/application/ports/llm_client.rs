use async_trait::async_trait;

/// Sampling knobs passed with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompletionParams {
    pub temperature: Option<f32>,
    pub max_tokens: Option<usize>,
}

impl CompletionParams {
    pub fn new(temperature: Option<f32>, max_tokens: Option<usize>) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a single prompt and returns the model's raw text reply.
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
