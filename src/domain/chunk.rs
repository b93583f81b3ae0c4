/// A bounded fragment of cleaned source text.
///
/// `index` is the chunk's position among its siblings and `offset` the
/// character offset of its first character in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub index: usize,
    pub offset: usize,
}

impl Chunk {
    pub fn new(text: String, index: usize, offset: usize) -> Self {
        Self {
            text,
            index,
            offset,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
