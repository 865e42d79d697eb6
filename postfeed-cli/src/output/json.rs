//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use postfeed_core::{Comment, Post, PostId, split_feed};
use postfeed_store::{CommentThread, FeedState, PostFeed};
use serde::{Serialize, Serializer};

// ============================================================================
// Output Types
// ============================================================================

/// The feed as shown to the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedOutput {
    #[serde(serialize_with = "serialize_state")]
    pub state: FeedState,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_datetime_opt")]
    pub last_updated: Option<DateTime<Utc>>,
    pub top_posts: Vec<Post>,
    pub remaining_posts: Vec<Post>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl FeedOutput {
    /// Takes a consistent snapshot of the feed.
    pub async fn capture(feed: &PostFeed, errors: &[String]) -> Self {
        let posts = feed.posts().await;
        let (top, remaining) = split_feed(&posts);
        Self {
            state: feed.state().await,
            connected: feed.is_connected(),
            last_updated: feed.last_updated().await,
            top_posts: top.to_vec(),
            remaining_posts: remaining.to_vec(),
            errors: errors.to_vec(),
        }
    }
}

/// Comments of one post with their expansion state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
    pub comments: Vec<CommentOutput>,
}

/// A single comment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentOutput {
    pub index: usize,
    pub expanded: bool,
    #[serde(flatten)]
    pub comment: Comment,
}

impl CommentsOutput {
    /// Converts a comment thread to output.
    pub fn from_thread(thread: &CommentThread) -> Self {
        let comments = thread
            .comments()
            .iter()
            .enumerate()
            .map(|(index, comment)| CommentOutput {
                index,
                expanded: thread.is_expanded(index),
                comment: comment.clone(),
            })
            .collect();
        Self {
            post_id: thread.post_id(),
            comments,
        }
    }
}

// ============================================================================
// Serialization helpers
// ============================================================================

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_state<S>(state: &FeedState, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(state.display_name())
}

#[allow(clippy::ref_option)]
fn serialize_datetime_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => s.serialize_str(&dt.to_rfc3339()),
        None => s.serialize_none(),
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}
