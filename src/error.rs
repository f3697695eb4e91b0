use thiserror::Error;

use crate::store::StoreError;

/// Failure modes of the public operations. Every operation returns this
/// through [`Result`], so callers can match exhaustively instead of
/// inspecting message strings.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No chunk metadata in this directory; run chunking first")]
    MetadataMissing,

    #[error("Metadata references chunk {index} but its file is missing")]
    ChunkMissing { index: usize },

    #[error("Failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
