//! HTTP JSON client.
//!
//! One call is one GET request: no retries, no caching, and no sharing of
//! in-flight requests between callers. The response body is decoded into
//! whatever shape the caller asks for.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::error::FetchError;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for `PostFeed`.
const USER_AGENT: &str = concat!("PostFeed/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client that fetches JSON documents.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner })
    }

    /// Performs a GET request and decodes the body as `T`.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        debug!("GET request");

        let response = self.inner.get(url).send().await?;
        debug!(status = %response.status(), "Response received");

        let body = response.error_for_status()?.bytes().await?;
        decode_body(&body)
    }

    /// Performs a GET request and reports whether any HTTP response came back.
    ///
    /// Used for reachability probes; the status code is irrelevant.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn probe(&self, url: &str) -> bool {
        match self.inner.head(url).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "Probe answered");
                true
            }
            Err(e) => {
                debug!(error = %e, "Probe failed");
                false
            }
        }
    }
}

/// Decodes a response body, classifying empty bodies and shape mismatches.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::NoData);
    }
    Ok(serde_json::from_slice(body)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use postfeed_core::{Comment, Post};

    #[test]
    fn test_decode_posts() {
        let body = br#"[{"userId":1,"id":1,"title":"t","body":"b"}]"#;
        let posts: Vec<Post> = decode_body(body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn test_decode_empty_body_is_no_data() {
        let err = decode_body::<Vec<Post>>(b"").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::NoData);

        let err = decode_body::<Vec<Post>>(b"  \n").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::NoData);
    }

    #[test]
    fn test_decode_garbage_is_serialization() {
        let err = decode_body::<Vec<Post>>(b"not valid json").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Serialization);
    }

    #[test]
    fn test_decode_wrong_shape_is_serialization() {
        let body = br#"[{"userId":1,"id":1,"title":"t","body":"b"}]"#;
        let err = decode_body::<Vec<Comment>>(body).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Serialization);
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let client = HttpClient::new().unwrap();
        let err = client.get_json::<Vec<Post>>("not a url").await.unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::InvalidUrl);
    }
}
