use std::path::PathBuf;

use sl_common::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid record #{index} in {}: {source}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("invalid configuration: {0}")]
    Config(#[source] ValidationError),
    #[error("failed to build sample candidates: {0}")]
    Samples(#[source] ValidationError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Console input reached end of file.
    #[error("input closed")]
    InputClosed,
}
