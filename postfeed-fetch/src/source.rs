//! Feed data source.

use async_trait::async_trait;
use postfeed_core::{Comment, Post, PostId};
use tracing::{debug, instrument};

use crate::endpoints::Endpoints;
use crate::error::FetchError;
use crate::http::HttpClient;

/// Where the feed gets its posts and comments from.
///
/// The feed state manager holds this as a trait object so tests can supply
/// canned responses.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the full posts collection.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Fetches the comments of one post.
    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError>;
}

/// [`FeedSource`] backed by the REST API.
#[derive(Debug, Clone)]
pub struct ApiSource {
    http: HttpClient,
    endpoints: Endpoints,
}

impl ApiSource {
    /// Creates a new API source.
    pub fn new(http: HttpClient, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }
}

#[async_trait]
impl FeedSource for ApiSource {
    #[instrument(skip(self))]
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let posts: Vec<Post> = self.http.get_json(&self.endpoints.posts_url()).await?;
        debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        let comments: Vec<Comment> = self
            .http
            .get_json(&self.endpoints.comments_url(post_id))
            .await?;
        debug!(count = comments.len(), "Fetched comments");
        Ok(comments)
    }
}
