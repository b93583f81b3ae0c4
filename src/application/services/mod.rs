mod extraction_service;
mod formatting_service;
mod generation_service;
mod mcq_pipeline;
mod prompts;
mod source_naming;
mod structured_response;

pub use extraction_service::ExtractionService;
pub use formatting_service::FormattingService;
pub use generation_service::GenerationService;
pub use mcq_pipeline::{BATCH_RESULTS_FILE, McqPipeline, PipelineConfig, PipelineError};
pub use prompts::{extraction_prompt, formatting_prompt, generation_prompt};
pub use source_naming::{output_name, subject_from_url, topic_from_url};
pub use structured_response::{ParseOutcome, parse_structured_response, recover_records};
