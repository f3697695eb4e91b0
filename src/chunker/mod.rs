mod splitter;


pub use splitter::{estimate_tokens, split_into_chunks, Chunk, SplitConfig};

/// Separator between paragraphs in source text, and between chunk bodies
/// when a context window is reassembled.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Maximum target tokens per chunk (configurable)
pub const DEFAULT_MAX_TOKENS: usize = 2000;

/// Default read-side context overlap budget between adjacent chunks
pub const DEFAULT_OVERLAP_TOKENS: usize = 200;
