mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ConfigurationError, LlmProvider, LlmSettings, LoggingSettings, PipelineSettings, Settings,
};
