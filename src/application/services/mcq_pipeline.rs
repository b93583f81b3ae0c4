use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{
    CompletionParams, ContentSource, LlmClient, RecordSink, RecordSinkError, TextSplitter,
};
use crate::domain::{
    BatchResult, ClassLevel, FormattedMcq, GeneratedMcq, McqCandidate, PipelineStage, SourceResult,
};

use super::source_naming::{output_name, subject_from_url, topic_from_url};
use super::{ExtractionService, FormattingService, GenerationService};

pub const BATCH_RESULTS_FILE: &str = "batch_results.json";

/// Run-wide settings every source is processed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub class_level: ClassLevel,
    pub generation_count: usize,
}

/// Sequences fetch, extraction, formatting, generation and persistence for
/// each source.
pub struct McqPipeline {
    content_source: Arc<dyn ContentSource>,
    text_splitter: Arc<dyn TextSplitter>,
    extraction: ExtractionService,
    formatting: FormattingService,
    generation: GenerationService,
    record_sink: Arc<dyn RecordSink>,
    config: PipelineConfig,
}

impl McqPipeline {
    pub fn new(
        content_source: Arc<dyn ContentSource>,
        text_splitter: Arc<dyn TextSplitter>,
        llm_client: Arc<dyn LlmClient>,
        params: CompletionParams,
        record_sink: Arc<dyn RecordSink>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            content_source,
            text_splitter,
            extraction: ExtractionService::new(Arc::clone(&llm_client), params),
            formatting: FormattingService::new(Arc::clone(&llm_client), params),
            generation: GenerationService::new(llm_client, params),
            record_sink,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Processes one source and persists whatever it produced.
    ///
    /// A source that yields nothing is not an error; only a failure to
    /// persist results is.
    #[tracing::instrument(skip(self))]
    pub async fn process(&self, source: &str) -> Result<SourceResult, PipelineError> {
        let result = self.run_stages(source).await;

        if !result.is_empty() {
            self.save(source, &result).await?;
            enter_stage(PipelineStage::Saved);
        }

        tracing::info!(
            formatted = result.formatted.len(),
            generated = result.generated.len(),
            "Source processed"
        );
        Ok(result)
    }

    /// Processes every source in order and writes the combined results at
    /// the end. Repeated sources are processed once.
    pub async fn process_batch<I, S>(&self, sources: I) -> Result<BatchResult, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = BatchResult::new();

        for source in sources {
            let source = source.as_ref();
            if batch.get(source).is_some() {
                tracing::debug!(source = %source, "Skipping repeated source");
                continue;
            }
            let result = self.process(source).await?;
            batch.record(source, result);
        }

        self.write_json(BATCH_RESULTS_FILE, &batch).await?;
        tracing::info!(
            sources = batch.len(),
            formatted = batch.total_formatted(),
            generated = batch.total_generated(),
            "Batch complete"
        );

        Ok(batch)
    }

    async fn run_stages(&self, source: &str) -> SourceResult {
        let html = match self.content_source.fetch(source).await {
            Ok(html) if !html.trim().is_empty() => html,
            Ok(_) => {
                tracing::warn!("Source returned no content");
                return SourceResult::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch source");
                return SourceResult::default();
            }
        };
        enter_stage(PipelineStage::Fetched);

        let mut candidates = self.content_source.extract_structured(&html);
        if candidates.is_empty() {
            tracing::info!("Direct MCQ extraction found nothing, using model extraction");
            candidates = self.extract_with_model(&html).await;
        } else {
            tracing::info!(count = candidates.len(), "Extracted MCQs from page structure");
        }

        if candidates.is_empty() {
            tracing::warn!("No MCQs found in source");
            return SourceResult::default();
        }
        enter_stage(PipelineStage::Extracted);

        tracing::info!(count = candidates.len(), "Formatting MCQs");
        let formatted = self
            .formatting
            .format(&candidates, self.config.class_level)
            .await;
        enter_stage(PipelineStage::Formatted);

        if formatted.is_empty() {
            return SourceResult::default();
        }

        let generated = self.generate_related(source, &formatted).await;
        enter_stage(PipelineStage::Generated);

        SourceResult::new(formatted, generated)
    }

    async fn extract_with_model(&self, html: &str) -> Vec<McqCandidate> {
        let body = self.content_source.extract_body(html);
        enter_stage(PipelineStage::BodyExtracted);

        let text = self.content_source.clean(&body);
        if text.trim().is_empty() {
            tracing::warn!("Page body contains no text");
            return Vec::new();
        }

        let chunks = self.text_splitter.split(&text);
        enter_stage(PipelineStage::ChunksReady);

        self.extraction.process_chunks(chunks).await
    }

    async fn generate_related(&self, source: &str, formatted: &[FormattedMcq]) -> Vec<GeneratedMcq> {
        let first = formatted.first();
        let topic = first
            .map(|mcq| mcq.topic.trim())
            .filter(|topic| !topic.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| topic_from_url(source));
        let subject = first
            .map(|mcq| mcq.subject.trim())
            .filter(|subject| !subject.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| subject_from_url(source));

        tracing::info!(topic = %topic, "Generating additional MCQs");
        self.generation
            .generate(&topic, self.config.generation_count, self.config.class_level)
            .await
            .into_iter()
            .map(|mut mcq| {
                if mcq.topic.trim().is_empty() {
                    mcq.topic = topic.clone();
                }
                if mcq.subject.trim().is_empty() {
                    mcq.subject = subject.clone();
                }
                if mcq.class_level.is_none() {
                    mcq.class_level = Some(self.config.class_level);
                }
                mcq
            })
            .collect()
    }

    async fn save(&self, source: &str, result: &SourceResult) -> Result<(), PipelineError> {
        let name = output_name(source);

        if !result.formatted.is_empty() {
            self.write_json(&format!("formatted_mcqs_{}.json", name), &result.formatted)
                .await?;
        }
        if !result.generated.is_empty() {
            self.write_json(&format!("generated_mcqs_{}.json", name), &result.generated)
                .await?;
        }

        Ok(())
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        destination: &str,
        records: &T,
    ) -> Result<(), PipelineError> {
        let document = serde_json::to_value(records).map_err(RecordSinkError::from)?;
        self.record_sink.write(destination, &document).await?;
        Ok(())
    }
}

fn enter_stage(stage: PipelineStage) {
    tracing::debug!(stage = %stage, "Pipeline stage reached");
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("persistence: {0}")]
    Persistence(#[from] RecordSinkError),
}
