use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment,
            json_format: settings.enable_json,
            default_filter: settings.level.clone(),
        }
    }
}
