//! Error types for trove-core

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while loading or saving the store file
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure reading or replacing the store
    #[error("store I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line failed to parse. The whole load fails rather than silently
    /// dropping records.
    #[error("malformed record at {}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record failed to serialize
    #[error("failed to encode record for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
