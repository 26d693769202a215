use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use bloglist_types::{Blog, BlogDraft, BlogId};

use crate::document::BlogDocument;
use crate::error::StoreResult;
use crate::traits::BlogStore;

/// In-memory, `Vec`-based blog store.
///
/// Intended for tests and embedding. Documents are kept in insertion order
/// behind a `RwLock`; each primitive holds the lock for its whole duration.
pub struct InMemoryBlogStore {
    documents: RwLock<Vec<BlogDocument>>,
}

impl InMemoryBlogStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `drafts`, in order.
    pub fn with_drafts(drafts: impl IntoIterator<Item = BlogDraft>) -> Self {
        Self {
            documents: RwLock::new(drafts.into_iter().map(BlogDocument::from_draft).collect()),
        }
    }

    /// Remove all records from the store.
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    fn position(documents: &[BlogDocument], id: &BlogId) -> Option<usize> {
        documents.iter().position(|doc| doc.oid == *id)
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list_all(&self) -> StoreResult<Vec<Blog>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().map(BlogDocument::to_blog).collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> StoreResult<Option<Blog>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .find(|doc| doc.oid == *id)
            .map(BlogDocument::to_blog))
    }

    async fn insert(&self, draft: BlogDraft) -> StoreResult<Blog> {
        let doc = BlogDocument::from_draft(draft);
        let blog = doc.to_blog();
        self.documents.write().await.push(doc);
        debug!(id = %blog.id, "inserted blog");
        Ok(blog)
    }

    async fn replace_by_id(&self, id: &BlogId, draft: BlogDraft) -> StoreResult<Option<Blog>> {
        let mut documents = self.documents.write().await;
        let Some(idx) = Self::position(&documents, id) else {
            return Ok(None);
        };
        documents[idx].replace(draft);
        debug!(%id, revision = documents[idx].revision, "replaced blog");
        Ok(Some(documents[idx].to_blog()))
    }

    async fn delete_by_id(&self, id: &BlogId) -> StoreResult<bool> {
        let mut documents = self.documents.write().await;
        match Self::position(&documents, id) {
            Some(idx) => {
                documents.remove(idx);
                debug!(%id, "deleted blog");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.documents.read().await.len())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryBlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.documents.try_read().map(|docs| docs.len()).ok();
        f.debug_struct("InMemoryBlogStore")
            .field("document_count", &count)
            .finish()
    }
}
