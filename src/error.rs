use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a data structure file
#[derive(Error, Debug)]
pub enum GenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("No data structures were selected. Use flags like -stack, -queue, etc.")]
    NothingSelected,

    #[error("Code for {key} not found at {}", path.display())]
    AssetNotFound {
        key: String,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to open output file: {}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenError>;
