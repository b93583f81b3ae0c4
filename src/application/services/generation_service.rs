use std::sync::Arc;

use crate::application::ports::{CompletionParams, LlmClient};
use crate::domain::{ClassLevel, GeneratedMcq};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompts::generation_prompt;
use super::structured_response::recover_records;

pub struct GenerationService {
    llm_client: Arc<dyn LlmClient>,
    params: CompletionParams,
}

impl GenerationService {
    pub fn new(llm_client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self { llm_client, params }
    }

    /// Requests `count` new questions on `topic`. The model may return more
    /// or fewer; whatever decodes is kept.
    #[tracing::instrument(skip(self), fields(class_level = %class_level))]
    pub async fn generate(
        &self,
        topic: &str,
        count: usize,
        class_level: ClassLevel,
    ) -> Vec<GeneratedMcq> {
        let prompt = generation_prompt(topic, count, class_level);

        let response = match self.llm_client.complete(&prompt, &self.params).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Model call failed during generation");
                return Vec::new();
            }
        };
        tracing::debug!(response = %sanitize_prompt(&response), "Generation response");

        let generated: Vec<GeneratedMcq> = recover_records(&response, Vec::new());
        if generated.len() != count {
            tracing::info!(
                requested = count,
                received = generated.len(),
                "Model returned a different number of questions than requested"
            );
        }

        generated
    }
}
