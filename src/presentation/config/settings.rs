use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::PipelineConfig;
use crate::domain::{ClassLevel, InvalidClassLevel};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub model: String,
    pub host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<usize>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Ollama,
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub class_level: u8,
    pub chunk_max_length: usize,
    pub generation_count: usize,
    pub output_dir: PathBuf,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    ClassLevel(#[from] InvalidClassLevel),
    #[error("invalid chunk max length: {0}. Expected a positive number of characters")]
    ChunkMaxLength(usize),
    #[error("invalid generation count: {0}. Expected a positive number")]
    GenerationCount(usize),
}

impl Settings {
    /// Layers built-in defaults, an optional `appsettings.<env>` file and
    /// `APP_`-prefixed environment variables (`APP_LLM__MODEL`, ...).
    pub fn load(environment: Environment) -> Result<Self, ConfigurationError> {
        let configuration = Config::builder()
            .set_default("llm.provider", "ollama")?
            .set_default("llm.model", "gemma3:1b")?
            .set_default("llm.host", "http://localhost:11434")?
            .set_default("llm.timeout_secs", 300)?
            .set_default("pipeline.class_level", 12)?
            .set_default("pipeline.chunk_max_length", 4000)?
            .set_default("pipeline.generation_count", 5)?
            .set_default("pipeline.output_dir", "mcq_output")?
            .set_default("pipeline.fetch_timeout_secs", 30)?
            .set_default("logging.level", "info,quizforge=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    /// Checks the run parameters and returns them in validated form.
    pub fn validate(&self) -> Result<PipelineConfig, ConfigurationError> {
        let class_level = ClassLevel::try_from(self.pipeline.class_level)?;

        if self.pipeline.chunk_max_length == 0 {
            return Err(ConfigurationError::ChunkMaxLength(
                self.pipeline.chunk_max_length,
            ));
        }
        if self.pipeline.generation_count == 0 {
            return Err(ConfigurationError::GenerationCount(
                self.pipeline.generation_count,
            ));
        }

        Ok(PipelineConfig {
            class_level,
            generation_count: self.pipeline.generation_count,
        })
    }
}
