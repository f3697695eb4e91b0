// Public API exports
pub mod chunker;
pub mod collector;
pub mod context;
pub mod error;
pub mod store;
pub mod usage;

// Re-export main types for convenience
pub use error::{Error, Result};

pub use chunker::{
    estimate_tokens, split_into_chunks, Chunk, SplitConfig, DEFAULT_MAX_TOKENS,
    DEFAULT_OVERLAP_TOKENS, PARAGRAPH_SEPARATOR,
};

pub use context::{
    get_context_window, persist_chunk_set, process_content, process_content_with,
    read_context_window, ChunkSetMetadata, ChunkSummary, ContextWindow, WindowRange,
};

pub use store::{chunk_key, DirStore, MemStore, Store, StoreError, METADATA_KEY, USAGE_KEY};

pub use usage::{read_ledger, record_usage, track_usage, UsageEvent, UsageLedger};

pub use collector::combine_markdown;
