// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `PostFeed` Store
//!
//! State management for the `PostFeed` application.
//!
//! This crate provides:
//!
//! - **PostFeed**: the feed state manager, observable via a broadcast channel
//! - **FavoritesStore**: persisted favorites snapshot (file or memory)
//! - **ConnectivityMonitor**: explicitly injected online/offline signal
//! - **FeedConfig**: user configuration with defaults
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use postfeed_fetch::{ApiSource, Endpoints, HttpClient};
//! use postfeed_store::{ConnectivityMonitor, FeedEvent, FileFavoritesStore, PostFeed};
//!
//! let feed = Arc::new(PostFeed::new(
//!     Arc::new(ApiSource::new(HttpClient::new()?, Endpoints::default())),
//!     Arc::new(ConnectivityMonitor::new(true)),
//!     Arc::new(FileFavoritesStore::new("favorites.json")),
//! ));
//!
//! let mut events = feed.subscribe();
//! feed.refresh().await;
//! while let Ok(event) = events.recv().await {
//!     if event == FeedEvent::PostsUpdated {
//!         println!("{} posts", feed.posts().await.len());
//!     }
//! }
//! ```

pub mod comments;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod favorites;
pub mod feed;
pub mod persistence;

pub use comments::CommentThread;
pub use config::{BASE_URL_ENV, FeedConfig};
pub use connectivity::{Connectivity, ConnectivityMonitor};
pub use error::StoreError;
pub use favorites::{FAVORITES_KEY, FavoritesStore, FileFavoritesStore, MemoryFavoritesStore};
pub use feed::{FeedEvent, FeedState, PostFeed};
pub use persistence::{
    default_config_dir, default_config_path, default_data_dir, default_favorites_path,
    ensure_dir, load_json, load_json_or_default, save_json,
};
