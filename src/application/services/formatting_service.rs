use std::sync::Arc;

use crate::application::ports::{CompletionParams, LlmClient};
use crate::domain::{ClassLevel, FormattedMcq, McqCandidate};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompts::formatting_prompt;
use super::structured_response::{ParseOutcome, log_outcome, parse_structured_response};

/// Normalizes a batch of candidates into the canonical shape with a single
/// model call.
pub struct FormattingService {
    llm_client: Arc<dyn LlmClient>,
    params: CompletionParams,
}

impl FormattingService {
    pub fn new(llm_client: Arc<dyn LlmClient>, params: CompletionParams) -> Self {
        Self { llm_client, params }
    }

    /// Formats `candidates` for `class_level`.
    ///
    /// Whenever the model fails, its reply cannot be decoded, or none of the
    /// records it returns are valid, the original candidates are returned,
    /// minus any that lack a question or do not have exactly four options.
    #[tracing::instrument(skip(self, candidates), fields(candidates = candidates.len(), class_level = %class_level))]
    pub async fn format(
        &self,
        candidates: &[McqCandidate],
        class_level: ClassLevel,
    ) -> Vec<FormattedMcq> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let payload = match serde_json::to_string(candidates) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize candidates");
                return validated(candidates);
            }
        };
        let prompt = formatting_prompt(&payload, class_level);

        let response = match self.llm_client.complete(&prompt, &self.params).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Model call failed during formatting");
                return validated(candidates);
            }
        };
        tracing::debug!(response = %sanitize_prompt(&response), "Formatting response");

        let outcome = parse_structured_response::<FormattedMcq>(&response);
        log_outcome(&outcome);
        match outcome {
            ParseOutcome::Parsed { records, dropped } if records.is_empty() && dropped > 0 => {
                tracing::warn!(dropped, "No formatted record was valid, keeping originals");
                validated(candidates)
            }
            outcome => outcome.or_fallback(|| validated(candidates)),
        }
    }
}

fn validated(candidates: &[McqCandidate]) -> Vec<FormattedMcq> {
    candidates
        .iter()
        .cloned()
        .filter_map(|candidate| match FormattedMcq::try_from(candidate) {
            Ok(mcq) => Some(mcq),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping candidate that cannot be formatted");
                None
            }
        })
        .collect()
}
