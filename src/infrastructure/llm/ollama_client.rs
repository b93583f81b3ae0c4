use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionParams, LlmClient, LlmClientError};

/// Client for the Ollama `/api/generate` endpoint.
pub struct OllamaClient {
    client: Client,
    host: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "GenerateOptions::is_empty")]
    options: GenerateOptions,
}

#[derive(Serialize, Default)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<usize>,
}

impl GenerateOptions {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.num_predict.is_none()
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(host: String, model: String, timeout: Duration) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            model,
        })
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<String, LlmClientError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                num_predict: params.max_tokens,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.host))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        Ok(generated.response)
    }
}
