// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostFeed` Fetch
//!
//! HTTP JSON fetching for the `PostFeed` application.
//!
//! - [`http::HttpClient`] - one GET per call, decoded into any
//!   `DeserializeOwned` shape, failures classified as [`FetchError`]
//! - [`endpoints::Endpoints`] - URLs of the posts and comments endpoints
//! - [`source::FeedSource`] - the seam the feed state manager talks to, with
//!   [`source::ApiSource`] as the network-backed implementation
//!
//! ## Example
//!
//! ```ignore
//! use postfeed_fetch::{ApiSource, Endpoints, FeedSource, HttpClient};
//!
//! let source = ApiSource::new(HttpClient::new()?, Endpoints::default());
//! let posts = source.fetch_posts().await?;
//! ```

pub mod endpoints;
pub mod error;
pub mod http;
pub mod source;

// Re-export key types at crate root
pub use endpoints::{DEFAULT_BASE_URL, Endpoints};
pub use error::{FetchError, FetchErrorKind};
pub use http::{HttpClient, decode_body};
pub use source::{ApiSource, FeedSource};
