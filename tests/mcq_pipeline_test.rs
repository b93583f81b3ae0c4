mod support;

use std::sync::Arc;

use quizforge::application::ports::{
    CompletionParams, ContentSource, LlmClientError, RecordSink, TextSplitter,
};
use quizforge::application::services::{
    BATCH_RESULTS_FILE, McqPipeline, PipelineConfig, PipelineError,
};
use quizforge::domain::ClassLevel;
use quizforge::infrastructure::llm::MockLlmClient;
use quizforge::infrastructure::text_processing::LineBoundarySplitter;

use support::{
    FailingSink, ONE_MCQ_REPLY, RecordingSink, StubContentSource, candidate, generated_reply,
};

const SOURCE: &str = "https://www.example.com/physics/class-12-mcq";
const FORMATTED_FILE: &str = "formatted_mcqs_example.com_physics_class-12-mcq.json";
const GENERATED_FILE: &str = "generated_mcqs_example.com_physics_class-12-mcq.json";

fn config() -> PipelineConfig {
    PipelineConfig {
        class_level: ClassLevel::Twelve,
        generation_count: 5,
    }
}

fn pipeline(
    source: Arc<StubContentSource>,
    llm: Arc<MockLlmClient>,
    sink: Arc<dyn RecordSink>,
) -> McqPipeline {
    let splitter: Arc<dyn TextSplitter> =
        Arc::new(LineBoundarySplitter::new(4000).expect("valid max length"));
    let source: Arc<dyn ContentSource> = source;

    McqPipeline::new(
        source,
        splitter,
        llm,
        CompletionParams::default(),
        sink,
        config(),
    )
}

#[tokio::test]
async fn given_unreachable_source_when_processing_then_returns_empty_without_model_calls() {
    let source = Arc::new(StubContentSource::unreachable());
    let llm = Arc::new(MockLlmClient::new());
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source.clone(), llm.clone(), sink.clone());

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert!(result.formatted.is_empty());
    assert!(result.generated.is_empty());
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(llm.call_count(), 0);
    assert!(sink.destinations().is_empty());
}

#[tokio::test]
async fn given_blank_page_when_processing_then_returns_empty() {
    let source = Arc::new(StubContentSource::serving("   \n  "));
    let llm = Arc::new(MockLlmClient::new());
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm.clone(), sink.clone());

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert!(result.is_empty());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_page_without_mcqs_when_processing_then_skips_formatting_and_generation() {
    let source = Arc::new(StubContentSource::serving("Coulomb's law describes forces."));
    let llm = Arc::new(MockLlmClient::replying("[]"));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm.clone(), sink.clone());

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert!(result.is_empty());
    assert_eq!(llm.call_count(), 1);
    assert!(sink.destinations().is_empty());
}

#[tokio::test]
async fn given_page_with_mcq_text_when_processing_then_extracts_formats_generates_and_saves() {
    let source = Arc::new(StubContentSource::serving("Q1. What is the SI unit of charge?"));
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Ok(ONE_MCQ_REPLY.to_string()),
        Ok("The questions are already well formatted.".to_string()),
        Ok(generated_reply(5)),
    ]));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm.clone(), sink.clone());

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert_eq!(result.formatted.len(), 1);
    assert_eq!(result.formatted[0].answer, "Coulomb");
    assert_eq!(result.generated.len(), 5);
    assert_eq!(llm.call_count(), 3);
    assert!(llm.prompts()[2].contains("Electric Charges and Fields"));
    assert_eq!(sink.destinations(), vec![FORMATTED_FILE, GENERATED_FILE]);

    let saved = sink.document(FORMATTED_FILE).expect("formatted file written");
    assert_eq!(saved[0]["question"], "What is the SI unit of electric charge?");
    assert_eq!(saved[0]["class"], 12);
}

#[tokio::test]
async fn given_structured_page_when_processing_then_skips_model_extraction() {
    let source = Arc::new(
        StubContentSource::serving("<html>listed questions</html>")
            .with_structured(vec![candidate("What is charge?")]),
    );
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Ok("no json".to_string()),
        Ok(generated_reply(5)),
    ]));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm.clone(), sink);

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert_eq!(llm.call_count(), 2);
    assert!(llm.prompts()[0].contains("What is charge?"));
    assert_eq!(result.formatted.len(), 1);
    assert_eq!(result.generated.len(), 5);
}

#[tokio::test]
async fn given_generated_records_missing_metadata_when_processing_then_backfills_from_source() {
    let source = Arc::new(
        StubContentSource::serving("<html></html>")
            .with_structured(vec![candidate("What is charge?")]),
    );
    let bare = r#"[{"question": "New?", "options": ["a", "b", "c", "d"],
                    "correct_option": "D", "explanation": "d", "difficulty": "Easy"}]"#;
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Ok("no json".to_string()),
        Ok(bare.to_string()),
    ]));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm, sink);

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    let generated = &result.generated[0];
    assert_eq!(generated.topic, "Electric Charges and Fields");
    assert_eq!(generated.subject, "Physics");
    assert_eq!(generated.class_level, Some(ClassLevel::Twelve));
}

#[tokio::test]
async fn given_failed_generation_when_processing_then_saves_formatted_only() {
    let source = Arc::new(
        StubContentSource::serving("<html></html>")
            .with_structured(vec![candidate("What is charge?")]),
    );
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Ok("no json".to_string()),
        Ok("no json either".to_string()),
    ]));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm, sink.clone());

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert_eq!(result.formatted.len(), 1);
    assert!(result.generated.is_empty());
    assert_eq!(sink.destinations(), vec![FORMATTED_FILE]);
}

#[tokio::test]
async fn given_failing_sink_when_processing_then_returns_persistence_error() {
    let source = Arc::new(
        StubContentSource::serving("<html></html>")
            .with_structured(vec![candidate("What is charge?")]),
    );
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Ok("no json".to_string()),
        Ok(generated_reply(5)),
    ]));
    let pipeline = pipeline(source, llm, Arc::new(FailingSink));

    let result = pipeline.process(SOURCE).await;

    assert!(matches!(result, Err(PipelineError::Persistence(_))));
}

#[tokio::test]
async fn given_batch_with_repeated_source_when_processing_then_fetches_once_and_writes_summary() {
    let source = Arc::new(StubContentSource::unreachable());
    let llm = Arc::new(MockLlmClient::new());
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source.clone(), llm, sink.clone());

    let batch = pipeline
        .process_batch(["https://a.example/mcq", "https://b.example/mcq", "https://a.example/mcq"])
        .await
        .expect("no persistence error");

    assert_eq!(batch.len(), 2);
    assert_eq!(source.fetch_count(), 2);
    assert_eq!(sink.destinations(), vec![BATCH_RESULTS_FILE]);

    let summary = sink.document(BATCH_RESULTS_FILE).expect("summary written");
    assert_eq!(summary["https://a.example/mcq"]["formatted"], serde_json::json!([]));
    assert_eq!(summary["https://b.example/mcq"]["generated"], serde_json::json!([]));
}

#[tokio::test]
async fn given_batch_when_processing_then_totals_cover_every_source() {
    let source = Arc::new(
        StubContentSource::serving("<html></html>")
            .with_structured(vec![candidate("Q one?"), candidate("Q two?")]),
    );
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Ok("no json".to_string()),
        Ok(generated_reply(5)),
        Ok("no json".to_string()),
        Ok(generated_reply(4)),
    ]));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm, sink.clone());

    let batch = pipeline
        .process_batch(vec![
            "https://a.example/physics".to_string(),
            "https://b.example/physics".to_string(),
        ])
        .await
        .expect("no persistence error");

    assert_eq!(batch.total_formatted(), 4);
    assert_eq!(batch.total_generated(), 9);
    assert_eq!(sink.destinations().len(), 5);
}

#[tokio::test]
async fn given_no_candidate_survives_formatting_when_processing_then_skips_generation() {
    let mut incomplete = candidate("Which option is missing?");
    incomplete.options.truncate(3);
    let source = Arc::new(
        StubContentSource::serving("<html></html>").with_structured(vec![incomplete]),
    );
    let llm = Arc::new(MockLlmClient::with_replies(vec![
        Err(LlmClientError::RateLimited),
        Ok(generated_reply(5)),
    ]));
    let sink = Arc::new(RecordingSink::default());
    let pipeline = pipeline(source, llm.clone(), sink.clone());

    let result = pipeline.process(SOURCE).await.expect("no persistence error");

    assert!(result.is_empty());
    assert_eq!(llm.call_count(), 1);
    assert!(sink.destinations().is_empty());
}
