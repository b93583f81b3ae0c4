use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{RecordSink, RecordSinkError};

/// Writes each document as pretty-printed JSON into one output directory.
pub struct JsonRecordStore {
    output_dir: PathBuf,
}

impl JsonRecordStore {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl RecordSink for JsonRecordStore {
    async fn write(
        &self,
        destination: &str,
        document: &serde_json::Value,
    ) -> Result<(), RecordSinkError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.output_dir.join(destination);
        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&path, bytes).await?;

        tracing::info!(path = %path.display(), "Data saved");
        Ok(())
    }
}
