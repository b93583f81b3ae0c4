mod batch_result;
mod chunk;
mod class_level;
mod generated_mcq;
mod mcq;
mod pipeline_stage;

pub use batch_result::{BatchResult, SourceResult};
pub use chunk::Chunk;
pub use class_level::{ClassLevel, InvalidClassLevel};
pub use generated_mcq::{CorrectOption, Difficulty, GeneratedMcq};
pub use mcq::{FormattedMcq, InvalidMcq, McqCandidate};
pub use pipeline_stage::PipelineStage;
