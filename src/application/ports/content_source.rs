use async_trait::async_trait;

use crate::domain::McqCandidate;

/// Where raw pages come from and how they are reduced to text.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ContentSourceError>;

    /// Returns the markup of the page body, or the whole input when no body
    /// element is present.
    fn extract_body(&self, html: &str) -> String;

    /// Reduces markup to plain text, one logical line per text block.
    fn clean(&self, body: &str) -> String;

    /// Recovers questions that the page already lays out in a recognisable
    /// structure, without involving a model.
    fn extract_structured(&self, html: &str) -> Vec<McqCandidate>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContentSourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },
}
