//! Comments of the currently opened post.

use postfeed_core::{Comment, PostId};
use std::collections::BTreeSet;

/// The comment list shown on the detail screen, with per-comment
/// expanded/collapsed state.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    post_id: Option<PostId>,
    comments: Vec<Comment>,
    expanded: BTreeSet<usize>,
}

impl CommentThread {
    /// Creates an empty thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the thread with freshly fetched comments. All comments start
    /// collapsed.
    pub fn replace(&mut self, post_id: PostId, comments: Vec<Comment>) {
        self.post_id = Some(post_id);
        self.comments = comments;
        self.expanded.clear();
    }

    /// The post these comments belong to, if any were loaded.
    pub fn post_id(&self) -> Option<PostId> {
        self.post_id
    }

    /// The comments in display order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Flips the expansion of the comment at `index`.
    ///
    /// Returns the new state, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.comments.len() {
            return None;
        }
        if self.expanded.remove(&index) {
            Some(false)
        } else {
            self.expanded.insert(index);
            Some(true)
        }
    }

    /// Returns true if the comment at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Indexes of all expanded comments, ascending.
    pub fn expanded(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}
