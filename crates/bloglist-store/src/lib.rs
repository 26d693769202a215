//! Blog repository for the bloglist service.
//!
//! # Storage Backends
//!
//! All backends implement the [`BlogStore`] trait:
//!
//! - [`InMemoryBlogStore`] -- `Vec`-based store for tests and embedding
//! - [`JsonFileBlogStore`] -- one JSON document array on disk
//!
//! [`connect`] opens a backend from a connection string (`memory://`,
//! `file://<path>`, or a bare path).
//!
//! # Design Rules
//!
//! 1. Backends hold documents keyed by an internal `_id`; only [`Blog`]
//!    values with a public `id` cross the trait boundary.
//! 2. Identifier shape is checked by [`BlogStore::parse_id`] without I/O,
//!    and a malformed id is a different error from a missing record.
//! 3. Each primitive is atomic; there are no multi-step transactions.
//! 4. All I/O errors are propagated, never silently ignored.
//!
//! [`Blog`]: bloglist_types::Blog

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;
pub mod uri;

mod document;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::JsonFileBlogStore;
pub use memory::InMemoryBlogStore;
pub use traits::BlogStore;
pub use uri::{connect, StoreUri};
