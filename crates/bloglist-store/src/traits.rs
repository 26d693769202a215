use async_trait::async_trait;
use bloglist_types::{Blog, BlogDraft, BlogId};

use crate::error::{StoreError, StoreResult};

/// Persistent storage for blog records.
///
/// All implementations must satisfy these invariants:
/// - Each primitive is atomic. No caller ever observes a half-applied insert,
///   replace, or delete.
/// - `insert` assigns a fresh [`BlogId`]; `replace_by_id` never changes it.
/// - Records leave the store as [`Blog`] values. Internal document fields
///   stay behind this trait.
/// - All I/O errors are propagated, never silently ignored.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Every record, in the order the backend yields them.
    async fn list_all(&self) -> StoreResult<Vec<Blog>>;

    /// Read a record by id. Returns `Ok(None)` if it does not exist.
    async fn find_by_id(&self, id: &BlogId) -> StoreResult<Option<Blog>>;

    /// Persist a draft under a newly assigned id.
    async fn insert(&self, draft: BlogDraft) -> StoreResult<Blog>;

    /// Overwrite every field of an existing record.
    ///
    /// Returns `Ok(None)` if no record has this id.
    async fn replace_by_id(&self, id: &BlogId, draft: BlogDraft) -> StoreResult<Option<Blog>>;

    /// Remove a record. Returns `true` if it existed.
    async fn delete_by_id(&self, id: &BlogId) -> StoreResult<bool>;

    /// Number of records.
    ///
    /// Default implementation materializes the whole collection. Backends
    /// may override with something cheaper.
    async fn count(&self) -> StoreResult<usize> {
        Ok(self.list_all().await?.len())
    }

    /// Check a client-supplied identifier against the store's id shape.
    ///
    /// Performs no I/O, so callers can reject malformed ids before touching
    /// the backend.
    fn parse_id(&self, raw: &str) -> StoreResult<BlogId> {
        BlogId::from_hex(raw).map_err(|source| StoreError::MalformedId {
            raw: raw.to_string(),
            source,
        })
    }

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
