//! Feed partition and ordering rules.
//!
//! A feed is one ordered list of posts. The first [`CAROUSEL_SIZE`] posts are
//! shown in the carousel; everything after that is shown in the list. Neither
//! view is stored, both are slices of the same list so that
//! `top ++ remaining == posts` always holds.

use super::post::Post;

/// Number of leading posts rendered in the carousel.
pub const CAROUSEL_SIZE: usize = 10;

/// Splits a feed into its carousel and list parts.
pub fn split_feed(posts: &[Post]) -> (&[Post], &[Post]) {
    posts.split_at(posts.len().min(CAROUSEL_SIZE))
}

/// Returns the carousel part of a feed (at most [`CAROUSEL_SIZE`] posts).
pub fn top_posts(posts: &[Post]) -> &[Post] {
    split_feed(posts).0
}

/// Returns the list part of a feed (everything past [`CAROUSEL_SIZE`]).
pub fn remaining_posts(posts: &[Post]) -> &[Post] {
    split_feed(posts).1
}

/// Reorders everything after the first `keep_leading` posts.
///
/// Favorites come first and keep their current relative order. Non-favorites
/// follow in ascending `id` order. The leading posts are never touched.
/// Applying this twice gives the same order as applying it once.
pub fn sort_by_favorites(posts: &mut [Post], keep_leading: usize) {
    let start = keep_leading.min(posts.len());
    // `sort_by_key` is stable, so favorites (all keyed `None`) keep their order.
    posts[start..].sort_by_key(|post| (!post.is_favourite).then_some(post.id));
}
