use bloglist_types::{Blog, BlogDraft, BlogId};
use serde::{Deserialize, Serialize};

/// A blog record as the document backends hold it.
///
/// `_id` is the storage key and `__v` a revision counter bumped on every
/// replace. Neither field is visible outside this crate; adapters hand out
/// [`Blog`] values built by [`BlogDocument::to_blog`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BlogDocument {
    #[serde(rename = "_id")]
    pub oid: BlogId,
    #[serde(rename = "__v", default)]
    pub revision: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
}

impl BlogDocument {
    /// A new document with a freshly generated key.
    pub fn from_draft(draft: BlogDraft) -> Self {
        Self {
            oid: BlogId::generate(),
            revision: 0,
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes,
        }
    }

    /// Overwrite every client field, keeping the key.
    pub fn replace(&mut self, draft: BlogDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.url = draft.url;
        self.likes = draft.likes;
        self.revision = self.revision.wrapping_add(1);
    }

    /// The public view of this document.
    pub fn to_blog(&self) -> Blog {
        Blog {
            id: self.oid,
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
        }
    }
}
