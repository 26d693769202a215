use std::path::PathBuf;

use bloglist_types::TypeError;

/// Errors from blog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The supplied identifier does not have the store's identifier shape.
    #[error("malformed id {raw:?}: {source}")]
    MalformedId {
        raw: String,
        #[source]
        source: TypeError,
    },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The on-disk collection could not be decoded.
    #[error("corrupt collection {path}: {reason}")]
    CorruptCollection { path: PathBuf, reason: String },

    /// The connection string names a backend this build does not know.
    #[error("unsupported store uri: {0}")]
    UnsupportedUri(String),
}

impl StoreError {
    /// Returns `true` for identifier-shape errors.
    pub fn is_malformed_id(&self) -> bool {
        matches!(self, Self::MalformedId { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
