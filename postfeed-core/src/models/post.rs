//! Post types.

use serde::{Deserialize, Deserializer, Serialize};

/// Identity of a post as assigned by the origin API.
pub type PostId = u64;

// ============================================================================
// Post
// ============================================================================

/// A blog post fetched from the posts endpoint.
///
/// `id` is the only identity key. `title` and `body` never change after a
/// fetch; `is_favourite` is the only field the feed mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Author id, informational only.
    pub user_id: u64,
    /// Stable identity from the origin API.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Whether the user marked this post as a favorite.
    ///
    /// A missing key and an explicit `null` both decode as `false`.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_favourite: bool,
}

impl Post {
    /// Creates a non-favorite post.
    pub fn new(user_id: u64, id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            body: body.into(),
            is_favourite: false,
        }
    }

    /// Returns this post with the favorite flag set.
    #[must_use]
    pub fn favourite(mut self) -> Self {
        self.is_favourite = true;
        self
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favourite(&mut self) -> bool {
        self.is_favourite = !self.is_favourite;
        self.is_favourite
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
