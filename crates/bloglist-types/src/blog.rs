use serde::{Deserialize, Serialize};

use crate::id::BlogId;

/// A persisted blog record as clients see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
}

impl Blog {
    /// Attach an identifier to a validated draft.
    pub fn from_draft(id: BlogId, draft: BlogDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes,
        }
    }

    /// The draft that would recreate this record's fields.
    pub fn to_draft(&self) -> BlogDraft {
        BlogDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
        }
    }
}

/// Client-supplied blog fields after schema validation.
///
/// Only [`crate::draft::parse_draft`] produces drafts from untrusted input,
/// so `title` and `url` are non-empty whenever a draft reaches a store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
}

impl BlogDraft {
    /// Create a draft with no author and zero likes.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            url: url.into(),
            likes: 0,
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the like count.
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }
}
