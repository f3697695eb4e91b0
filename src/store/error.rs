use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create store directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Key not found in store: {0}")]
    KeyNotFound(String),

    #[error("Failed to read key {key}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },

    #[error("Failed to write key {key}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("Failed to list store contents: {0}")]
    List(std::io::Error),
}
