mod html_content_source;
mod line_boundary_splitter;
mod listed_mcq_extractor;
mod text_sanitizer;

pub use html_content_source::HtmlContentSource;
pub use line_boundary_splitter::{LineBoundarySplitter, LineChunks};
pub use listed_mcq_extractor::extract_listed_mcqs;
pub use text_sanitizer::normalize_page_text;
