//! Comment types.

use serde::{Deserialize, Serialize};

use super::post::PostId;

/// A read-only comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The post this comment belongs to.
    pub post_id: PostId,
    /// Comment id.
    pub id: u64,
    /// Commenter display name.
    pub name: String,
    /// Commenter email.
    pub email: String,
    /// Comment text.
    pub body: String,
}
