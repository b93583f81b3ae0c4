mod content_source;
mod llm_client;
mod record_sink;
mod text_splitter;

pub use content_source::{ContentSource, ContentSourceError};
pub use llm_client::{CompletionParams, LlmClient, LlmClientError};
pub use record_sink::{RecordSink, RecordSinkError};
pub use text_splitter::{ChunkStream, TextSplitter, TextSplitterError};
