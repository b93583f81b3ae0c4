use std::fmt;

/// Progress of a single source through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStage {
    Fetched,
    BodyExtracted,
    ChunksReady,
    Extracted,
    Formatted,
    Generated,
    Saved,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Fetched => "FETCHED",
            PipelineStage::BodyExtracted => "BODY_EXTRACTED",
            PipelineStage::ChunksReady => "CHUNKS_READY",
            PipelineStage::Extracted => "EXTRACTED",
            PipelineStage::Formatted => "FORMATTED",
            PipelineStage::Generated => "GENERATED",
            PipelineStage::Saved => "SAVED",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
