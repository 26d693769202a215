use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::file::JsonFileBlogStore;
use crate::memory::InMemoryBlogStore;
use crate::traits::BlogStore;

/// A parsed store connection string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreUri {
    /// `memory://`: process-local, lost on exit.
    Memory,
    /// `file://<path>` or a bare filesystem path.
    JsonFile(PathBuf),
}

impl StoreUri {
    /// Parse a connection string.
    pub fn parse(uri: &str) -> StoreResult<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(StoreError::UnsupportedUri(uri.to_string()));
        }
        if uri == "memory://" || uri == "memory" {
            return Ok(Self::Memory);
        }
        if let Some(path) = uri.strip_prefix("file://") {
            if path.is_empty() {
                return Err(StoreError::UnsupportedUri(uri.to_string()));
            }
            return Ok(Self::JsonFile(PathBuf::from(path)));
        }
        if uri.contains("://") {
            return Err(StoreError::UnsupportedUri(uri.to_string()));
        }
        Ok(Self::JsonFile(PathBuf::from(uri)))
    }
}

impl std::fmt::Display for StoreUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory://"),
            Self::JsonFile(path) => write!(f, "file://{}", path.display()),
        }
    }
}

/// Open the store a connection string names.
pub async fn connect(uri: &str) -> StoreResult<Arc<dyn BlogStore>> {
    let store: Arc<dyn BlogStore> = match StoreUri::parse(uri)? {
        StoreUri::Memory => Arc::new(InMemoryBlogStore::new()),
        StoreUri::JsonFile(path) => Arc::new(JsonFileBlogStore::open(path).await?),
    };
    tracing::info!(backend = store.backend(), "connected to blog store");
    Ok(store)
}
