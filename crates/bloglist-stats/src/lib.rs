//! Aggregate statistics over blog records.
//!
//! Everything here is a pure function over an already-materialized slice.
//! Nothing touches a store; callers load the records first.

use bloglist_types::{Blog, BlogDraft};

/// A record that carries a like count.
pub trait Likes {
    fn likes(&self) -> u64;
}

impl Likes for Blog {
    fn likes(&self) -> u64 {
        self.likes
    }
}

impl Likes for BlogDraft {
    fn likes(&self) -> u64 {
        self.likes
    }
}

impl<T: Likes + ?Sized> Likes for &T {
    fn likes(&self) -> u64 {
        (**self).likes()
    }
}

/// Scaffold aggregate. Always 1.
pub fn dummy<T>(_blogs: &[T]) -> u32 {
    1
}

/// Sum of likes across `blogs`; 0 for an empty slice.
pub fn total_likes<T: Likes>(blogs: &[T]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |sum, blog| sum.saturating_add(blog.likes()))
}

/// The record with the most likes, or `None` for an empty slice.
///
/// The first element seeds the reduction and a later element only replaces
/// the current favorite when it has strictly more likes, so ties go to the
/// earliest element and a one-element slice returns that element.
pub fn favorite_blog<T: Likes>(blogs: &[T]) -> Option<&T> {
    blogs
        .iter()
        .reduce(|max, cur| if cur.likes() > max.likes() { cur } else { max })
}
