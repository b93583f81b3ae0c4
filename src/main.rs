use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use quizforge::application::ports::CompletionParams;
use quizforge::application::services::McqPipeline;
use quizforge::infrastructure::llm::LlmClientFactory;
use quizforge::infrastructure::observability::{TracingConfig, init_tracing};
use quizforge::infrastructure::storage::JsonRecordStore;
use quizforge::infrastructure::text_processing::{HtmlContentSource, LineBoundarySplitter};
use quizforge::presentation::cli::parse_url_list;
use quizforge::presentation::{Cli, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let mut settings = Settings::load(environment)?;
    cli.apply_to(&mut settings);
    let pipeline_config = settings.validate()?;

    init_tracing(TracingConfig::from_settings(&settings.logging, environment));

    let llm_client = LlmClientFactory::create(&settings.llm)?;
    let params = CompletionParams::new(settings.llm.temperature, settings.llm.max_tokens);
    let content_source = Arc::new(HtmlContentSource::new(Duration::from_secs(
        settings.pipeline.fetch_timeout_secs,
    ))?);
    let text_splitter = Arc::new(LineBoundarySplitter::new(
        settings.pipeline.chunk_max_length,
    )?);
    let record_store = Arc::new(JsonRecordStore::new(settings.pipeline.output_dir.clone()));

    let pipeline = McqPipeline::new(
        content_source,
        text_splitter,
        llm_client,
        params,
        record_store,
        pipeline_config,
    );

    if let Some(url) = &cli.url {
        let result = pipeline.process(url).await?;
        tracing::info!(
            formatted = result.formatted.len(),
            generated = result.generated.len(),
            "Processed existing MCQs and generated new MCQs"
        );
    }

    if let Some(path) = &cli.urls_file {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read URL list {}", path.display()))?;
        let urls = parse_url_list(&contents);

        tracing::info!(count = urls.len(), "Processing URLs from file");
        let batch = pipeline.process_batch(&urls).await?;
        tracing::info!(
            urls = urls.len(),
            formatted = batch.total_formatted(),
            generated = batch.total_generated(),
            "Processed existing MCQs and generated new MCQs"
        );
    }

    tracing::info!(
        output_dir = %settings.pipeline.output_dir.display(),
        "All processing complete"
    );
    Ok(())
}
