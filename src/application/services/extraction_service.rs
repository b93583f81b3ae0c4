use std::sync::Arc;

use crate::application::ports::{CompletionParams, LlmClient};
use crate::domain::{Chunk, McqCandidate};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompts::extraction_prompt;
use super::structured_response::recover_records;

/// Asks the model to pull question candidates out of each chunk of text.
pub struct ExtractionService {
    llm_client: Arc<dyn LlmClient>,
    params: CompletionParams,
}

impl ExtractionService {
    pub fn new(llm_client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self { llm_client, params }
    }

    /// Extracts candidates from one chunk. Model and parse failures yield an
    /// empty result.
    #[tracing::instrument(skip(self, chunk), fields(chunk_index = chunk.index, chunk_chars = chunk.char_len()))]
    pub async fn extract(&self, chunk: &Chunk) -> Vec<McqCandidate> {
        let prompt = extraction_prompt(&chunk.text);

        let response = match self.llm_client.complete(&prompt, &self.params).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Model call failed during extraction");
                return Vec::new();
            }
        };
        tracing::debug!(response = %sanitize_prompt(&response), "Extraction response");

        recover_records(&response, Vec::new())
    }

    /// Runs [`Self::extract`] over every chunk in order and concatenates the
    /// results.
    pub async fn process_chunks<I>(&self, chunks: I) -> Vec<McqCandidate>
    where
        I: IntoIterator<Item = Chunk>,
    {
        let mut all = Vec::new();

        for chunk in chunks {
            let found = self.extract(&chunk).await;
            tracing::info!(
                chunk_index = chunk.index,
                found = found.len(),
                "Processed chunk"
            );
            all.extend(found);
        }

        all
    }
}
