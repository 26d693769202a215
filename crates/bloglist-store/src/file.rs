use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use bloglist_types::{Blog, BlogDraft, BlogId};

use crate::document::BlogDocument;
use crate::error::{StoreError, StoreResult};
use crate::traits::BlogStore;

/// Blog store persisted as a single JSON array of documents.
///
/// The collection is loaded once on open and mirrored in memory. Every
/// mutation is applied to a copy, written to a sibling temp file, renamed over
/// the collection file, and only then made visible. A failed write leaves
/// both the file and the in-memory view unchanged.
pub struct JsonFileBlogStore {
    path: PathBuf,
    tmp_path: PathBuf,
    documents: Mutex<Vec<BlogDocument>>,
}

impl JsonFileBlogStore {
    /// Open (or lazily create) the collection file at `path`.
    ///
    /// A missing or blank file is an empty collection. The file itself is
    /// not created until the first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let Some(file_name) = path.file_name() else {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("collection path has no file name: {}", path.display()),
            )));
        };
        let tmp_path = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

        let documents: Vec<BlogDocument> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::CorruptCollection {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), count = documents.len(), "opened blog collection");
        Ok(Self {
            path,
            tmp_path,
            documents: Mutex::new(documents),
        })
    }

    /// Path of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, documents: &[BlogDocument]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(documents)?;
        tokio::fs::write(&self.tmp_path, &bytes).await?;
        tokio::fs::rename(&self.tmp_path, &self.path).await?;
        debug!(path = %self.path.display(), count = documents.len(), "collection persisted");
        Ok(())
    }
}

#[async_trait]
impl BlogStore for JsonFileBlogStore {
    async fn list_all(&self) -> StoreResult<Vec<Blog>> {
        let documents = self.documents.lock().await;
        Ok(documents.iter().map(BlogDocument::to_blog).collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> StoreResult<Option<Blog>> {
        let documents = self.documents.lock().await;
        Ok(documents
            .iter()
            .find(|doc| doc.oid == *id)
            .map(BlogDocument::to_blog))
    }

    async fn insert(&self, draft: BlogDraft) -> StoreResult<Blog> {
        let mut documents = self.documents.lock().await;
        let doc = BlogDocument::from_draft(draft);
        let blog = doc.to_blog();

        let mut next = documents.clone();
        next.push(doc);
        self.persist(&next).await?;
        *documents = next;
        Ok(blog)
    }

    async fn replace_by_id(&self, id: &BlogId, draft: BlogDraft) -> StoreResult<Option<Blog>> {
        let mut documents = self.documents.lock().await;
        let Some(idx) = documents.iter().position(|doc| doc.oid == *id) else {
            return Ok(None);
        };

        let mut next = documents.clone();
        next[idx].replace(draft);
        let blog = next[idx].to_blog();
        self.persist(&next).await?;
        *documents = next;
        Ok(Some(blog))
    }

    async fn delete_by_id(&self, id: &BlogId) -> StoreResult<bool> {
        let mut documents = self.documents.lock().await;
        let Some(idx) = documents.iter().position(|doc| doc.oid == *id) else {
            return Ok(false);
        };

        let mut next = documents.clone();
        next.remove(idx);
        self.persist(&next).await?;
        *documents = next;
        Ok(true)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.documents.lock().await.len())
    }

    fn backend(&self) -> &'static str {
        "json-file"
    }
}

impl std::fmt::Debug for JsonFileBlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileBlogStore")
            .field("path", &self.path)
            .finish()
    }
}
