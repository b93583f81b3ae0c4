use std::path::PathBuf;

use clap::Parser;

use super::config::{LlmProvider, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "quizforge",
    version,
    about = "Extract, format and generate CBSE multiple-choice questions from web pages"
)]
#[command(group(
    clap::ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["url", "urls_file"])
))]
pub struct Cli {
    /// Page to scrape for MCQs
    #[arg(long)]
    pub url: Option<String>,

    /// File with one URL per line
    #[arg(long)]
    pub urls_file: Option<PathBuf>,

    /// Class level (10, 11 or 12)
    #[arg(long = "class", value_parser = clap::value_parser!(u8).range(10..=12))]
    pub class_level: Option<u8>,

    #[arg(long, value_enum)]
    pub provider: Option<LlmProvider>,

    /// Model identifier, e.g. gemma3:1b
    #[arg(long)]
    pub model: Option<String>,

    /// Model host or API base URL
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Number of new questions to generate per source
    #[arg(long)]
    pub count: Option<usize>,

    /// Maximum chunk length in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Overrides loaded settings with any flags given on the command line.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(class_level) = self.class_level {
            settings.pipeline.class_level = class_level;
        }
        if let Some(provider) = self.provider {
            settings.llm.provider = provider;
        }
        if let Some(model) = &self.model {
            settings.llm.model = model.clone();
        }
        if let Some(host) = &self.host {
            settings.llm.host = host.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.llm.api_key = Some(api_key.clone());
        }
        if let Some(count) = self.count {
            settings.pipeline.generation_count = count;
        }
        if let Some(chunk_size) = self.chunk_size {
            settings.pipeline.chunk_max_length = chunk_size;
        }
        if let Some(output_dir) = &self.output_dir {
            settings.pipeline.output_dir = output_dir.clone();
        }
    }
}

/// Reads source URLs from a list, one per line, skipping blank lines.
pub fn parse_url_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
