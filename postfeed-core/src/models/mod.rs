//! Domain models for `PostFeed`.
//!
//! ## Submodules
//!
//! - [`post`] - Blog posts and their favorite flag
//! - [`comment`] - Read-only comments attached to a post
//! - [`feed`] - Carousel/list partition and the favorites ordering policy

mod comment;
mod feed;
mod post;

// Re-export everything at the models level
pub use comment::Comment;
pub use feed::{CAROUSEL_SIZE, remaining_posts, sort_by_favorites, split_feed, top_posts};
pub use post::{Post, PostId};
#[cfg(test)]
mod serde_tests;
