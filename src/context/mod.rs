mod types;


pub use types::{ChunkSetMetadata, ChunkSummary, ContextWindow, WindowRange};

use std::path::Path;

use crate::chunker::{
    estimate_tokens, split_into_chunks, Chunk, SplitConfig, PARAGRAPH_SEPARATOR,
};
use crate::error::{Error, Result};
use crate::store::{chunk_key, DirStore, Store, StoreError, METADATA_KEY};

/// Characters of chunk content kept in the metadata preview.
const PREVIEW_CHARS: usize = 50;

/// Write a chunk set to the store: one entry per chunk keyed by index,
/// then the aggregate metadata under its fixed key. Everything is
/// overwritten wholesale; a failure mid-sequence can leave a mix of old
/// and new chunk entries, which callers resolve by re-running.
pub fn persist_chunk_set(chunks: &[Chunk], store: &dyn Store) -> Result<ChunkSetMetadata> {
    for chunk in chunks {
        store.put(&chunk_key(chunk.index), &chunk.content)?;
    }

    let metadata = ChunkSetMetadata {
        total_chunks: chunks.len(),
        total_tokens: chunks.iter().map(|c| c.token_count).sum(),
        chunks: chunks.iter().map(summarize).collect(),
    };
    store.put(METADATA_KEY, &serde_json::to_string_pretty(&metadata)?)?;

    Ok(metadata)
}

fn summarize(chunk: &Chunk) -> ChunkSummary {
    let preview: String = chunk.content.chars().take(PREVIEW_CHARS).collect();
    ChunkSummary {
        index: chunk.index,
        token_count: chunk.token_count,
        first_words: format!("{preview}..."),
    }
}

/// Read the chunks surrounding `center` from the store.
///
/// Clamping policy: `center` is clamped into `[0, total_chunks - 1]`
/// before expanding by `radius` on each side, so any center — negative or
/// past the end — yields a valid edge window rather than an error, and
/// `start <= end` holds whenever the set is non-empty. Fails when the
/// metadata is absent (never chunked) or a chunk entry named by the
/// metadata is missing.
pub fn read_context_window(center: i64, radius: usize, store: &dyn Store) -> Result<ContextWindow> {
    let metadata = load_metadata(store)?;

    if metadata.total_chunks == 0 {
        return Ok(ContextWindow {
            content: String::new(),
            range: WindowRange { start: 0, end: 0 },
            estimated_tokens: 0,
        });
    }

    let last = metadata.total_chunks - 1;
    let center = center.clamp(0, last as i64) as usize;
    let start = center.saturating_sub(radius);
    let end = center.saturating_add(radius).min(last);

    let mut bodies = Vec::with_capacity(end - start + 1);
    for index in start..=end {
        let body = store.get(&chunk_key(index)).map_err(|err| match err {
            StoreError::KeyNotFound(_) => Error::ChunkMissing { index },
            other => Error::Store(other),
        })?;
        bodies.push(body);
    }

    let content = bodies.join(PARAGRAPH_SEPARATOR);
    let estimated_tokens = estimate_tokens(&content);
    Ok(ContextWindow {
        content,
        range: WindowRange { start, end },
        estimated_tokens,
    })
}

fn load_metadata(store: &dyn Store) -> Result<ChunkSetMetadata> {
    let raw = store.get(METADATA_KEY).map_err(|err| match err {
        StoreError::KeyNotFound(_) => Error::MetadataMissing,
        other => Error::Store(other),
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Split `content` with the default budgets and persist the chunk set
/// into `output_dir`, creating the directory if needed.
pub fn process_content(content: &str, output_dir: &Path) -> Result<ChunkSetMetadata> {
    process_content_with(content, output_dir, SplitConfig::default())
}

/// As [`process_content`], with explicit splitting parameters.
pub fn process_content_with(
    content: &str,
    output_dir: &Path,
    config: SplitConfig,
) -> Result<ChunkSetMetadata> {
    let store = DirStore::create(output_dir)?;
    let chunks = split_into_chunks(content, config);
    persist_chunk_set(&chunks, &store)
}

/// Read a context window from `output_dir` without creating it.
pub fn get_context_window(center: i64, radius: usize, output_dir: &Path) -> Result<ContextWindow> {
    let store = DirStore::open(output_dir);
    read_context_window(center, radius, &store)
}
