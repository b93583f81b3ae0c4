use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::{ChatCompletionsClient, OllamaClient};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("missing API key: OpenAI-compatible provider requires llm.api_key")]
    MissingApiKey,
    #[error("client initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        let timeout = Duration::from_secs(settings.timeout_secs);

        match settings.provider {
            LlmProvider::Ollama => {
                tracing::info!(model = %settings.model, host = %settings.host, "Using Ollama model");
                let client = OllamaClient::new(settings.host.clone(), settings.model.clone(), timeout)
                    .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            LlmProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(LlmClientFactoryError::MissingApiKey)?;
                tracing::info!(model = %settings.model, host = %settings.host, "Using OpenAI-compatible model");
                let client = ChatCompletionsClient::new(
                    settings.host.clone(),
                    key,
                    settings.model.clone(),
                    timeout,
                )
                .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
        }
    }
}
