use serde::{Deserialize, Serialize};

/// Aggregate record for one chunking run over one input, stored under the
/// metadata key. Field names are camelCase on disk (`totalChunks`, ...) —
/// that shape is part of the directory contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSetMetadata {
    pub total_chunks: usize,
    pub total_tokens: usize,
    pub chunks: Vec<ChunkSummary>,
}

/// Per-chunk entry in the metadata: position, size, and a short content
/// preview for inspection (not reconstruction).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSummary {
    pub index: usize,
    pub token_count: usize,
    pub first_words: String,
}

/// Resolved inclusive chunk range of a context window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRange {
    pub start: usize,
    pub end: usize,
}

/// A contiguous run of chunk bodies around a target index.
#[derive(Debug, Clone, Serialize)]
pub struct ContextWindow {
    /// Chunk bodies for `range`, joined by the paragraph separator
    pub content: String,
    pub range: WindowRange,
    /// Estimate recomputed from `content`, not read from stored metadata
    pub estimated_tokens: usize,
}
