use crate::application::ports::{ChunkStream, TextSplitter, TextSplitterError};
use crate::domain::Chunk;

/// Splits text into chunks of at most `max_length` characters, cutting after
/// the last line break inside each window when there is one.
#[derive(Debug, Clone, Copy)]
pub struct LineBoundarySplitter {
    max_length: usize,
}

impl LineBoundarySplitter {
    pub fn new(max_length: usize) -> Result<Self, TextSplitterError> {
        if max_length == 0 {
            return Err(TextSplitterError::InvalidMaxLength(max_length));
        }
        Ok(Self { max_length })
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns a lazy iterator over the chunks of `text`. Cloning the
    /// iterator restarts from the clone's position.
    pub fn chunks<'a>(&self, text: &'a str) -> LineChunks<'a> {
        LineChunks {
            text,
            max_length: self.max_length,
            byte_pos: 0,
            char_pos: 0,
            index: 0,
        }
    }
}

impl TextSplitter for LineBoundarySplitter {
    fn split<'a>(&self, text: &'a str) -> ChunkStream<'a> {
        Box::new(self.chunks(text))
    }
}

#[derive(Debug, Clone)]
pub struct LineChunks<'a> {
    text: &'a str,
    max_length: usize,
    byte_pos: usize,
    char_pos: usize,
    index: usize,
}

impl Iterator for LineChunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let rest = &self.text[self.byte_pos..];
        if rest.is_empty() {
            return None;
        }

        let window_end = rest
            .char_indices()
            .nth(self.max_length)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let cut = if window_end == rest.len() {
            window_end
        } else {
            rest[..window_end]
                .rfind('\n')
                .map(|i| i + 1)
                .unwrap_or(window_end)
        };

        let piece = &rest[..cut];
        let chunk = Chunk::new(piece.to_string(), self.index, self.char_pos);

        self.byte_pos += cut;
        self.char_pos += piece.chars().count();
        self.index += 1;

        Some(chunk)
    }
}
