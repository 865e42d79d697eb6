//! Endpoint URLs.

/// Base URL of the public posts API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// URLs of the posts and comments endpoints under one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Creates endpoints rooted at `base_url`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// URL of the posts collection.
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    /// URL of the comments of one post.
    pub fn comments_url(&self, post_id: u64) -> String {
        format!("{}/posts/{post_id}/comments", self.base_url)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
