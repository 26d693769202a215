//! Domain types for the bloglist service.
//!
//! Every other bloglist crate depends on `bloglist-types`.
//!
//! # Key Types
//!
//! - [`Blog`]: A persisted blog record with its public identifier
//! - [`BlogDraft`]: Validated client fields for create and replace
//! - [`BlogId`]: Store-assigned 12-byte identifier, hex on the wire
//! - [`DRAFT_SCHEMA`]: The single field schema behind [`parse_draft`]

pub mod blog;
pub mod draft;
pub mod error;
pub mod id;

pub use blog::{Blog, BlogDraft};
pub use draft::{parse_draft, required_fields, FieldKind, FieldRule, DRAFT_SCHEMA};
pub use error::{FieldIssue, TypeError, ValidationError};
pub use id::{BlogId, BLOG_ID_LEN};
