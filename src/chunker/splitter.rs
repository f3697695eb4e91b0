use super::{DEFAULT_MAX_TOKENS, DEFAULT_OVERLAP_TOKENS, PARAGRAPH_SEPARATOR};

/// A bounded contiguous span of source text, positioned in the sequence
/// the splitter produced it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Whole paragraphs joined by the paragraph separator
    pub content: String,
    /// Estimated token count (sum over the contained paragraphs)
    pub token_count: usize,
    /// 0-based position in the produced sequence, assigned at flush
    pub index: usize,
}

/// Splitting parameters.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    /// Token budget per chunk. A single paragraph estimated above this
    /// becomes an oversized chunk of its own; paragraphs are never cut.
    pub max_tokens: usize,
    /// Read-side overlap budget. Splitting emits disjoint chunks so that
    /// concatenating them reproduces the input; overlapping context is
    /// assembled at read time by `read_context_window` instead.
    pub overlap_tokens: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            overlap_tokens: DEFAULT_OVERLAP_TOKENS,
        }
    }
}

/// Estimate token count for a piece of text.
///
/// Character count divided by four, rounded up — a budgeting heuristic,
/// not an exact count. Total over any input; empty text estimates to 0.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}

/// Split `text` into token-bounded chunks along paragraph boundaries.
///
/// Greedy packing: paragraphs (blank-line separated) are accumulated in
/// order until the next one would push the running estimate past
/// `max_tokens`, at which point the accumulator is flushed and the
/// paragraph seeds the next chunk. The final accumulator is flushed
/// unconditionally. Chunk indices are assigned 0..n-1 in flush order, and
/// joining the chunk contents with the paragraph separator reproduces the
/// input.
pub fn split_into_chunks(text: &str, config: SplitConfig) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_tokens = 0usize;

    for paragraph in text.split(PARAGRAPH_SEPARATOR) {
        let paragraph_tokens = estimate_tokens(paragraph);

        if !current.is_empty() && current_tokens + paragraph_tokens > config.max_tokens {
            flush(&mut chunks, &current, current_tokens);
            current.clear();
            current_tokens = 0;
        }

        current.push(paragraph);
        current_tokens += paragraph_tokens;
    }

    flush(&mut chunks, &current, current_tokens);
    chunks
}

/// Append the accumulated paragraphs as a chunk. Empty accumulations
/// (empty input) produce no chunk.
fn flush(chunks: &mut Vec<Chunk>, paragraphs: &[&str], token_count: usize) {
    let content = paragraphs.join(PARAGRAPH_SEPARATOR);
    if content.is_empty() {
        return;
    }
    let index = chunks.len();
    chunks.push(Chunk {
        content,
        token_count,
        index,
    });
}
