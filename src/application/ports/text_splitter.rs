use crate::domain::Chunk;

pub type ChunkStream<'a> = Box<dyn Iterator<Item = Chunk> + Send + 'a>;

pub trait TextSplitter: Send + Sync {
    /// Lazily partitions `text` into ordered chunks.
    fn split<'a>(&self, text: &'a str) -> ChunkStream<'a>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("invalid max length: {0}. Expected a positive number of characters")]
    InvalidMaxLength(usize),
}
