use std::io;

use async_trait::async_trait;

#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persists an already validated document under `destination`.
    async fn write(
        &self,
        destination: &str,
        document: &serde_json::Value,
    ) -> Result<(), RecordSinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordSinkError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
