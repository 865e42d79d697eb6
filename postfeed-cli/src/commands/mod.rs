//! CLI command implementations.
//!
//! Every command builds its collaborators here, in one place, and hands them
//! to the feed explicitly.

pub mod comments;
pub mod favorite;
pub mod favorites;
pub mod posts;
pub mod watch;

use anyhow::{Context, Result};
use postfeed_fetch::{ApiSource, Endpoints, HttpClient};
use postfeed_store::{
    ConnectivityMonitor, FavoritesStore, FeedConfig, FeedEvent, FileFavoritesStore,
    MemoryFavoritesStore, PostFeed,
};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::debug;

use crate::Cli;

/// Everything a command needs to talk to the feed.
pub struct Session {
    pub config: FeedConfig,
    pub http: HttpClient,
    pub endpoints: Endpoints,
    pub connectivity: Arc<ConnectivityMonitor>,
    pub favorites: Arc<dyn FavoritesStore>,
    pub feed: Arc<PostFeed>,
}

impl Session {
    /// Loads configuration and wires the feed to its collaborators.
    pub async fn open(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => FeedConfig::load_from(path)
                .await
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => FeedConfig::load().await.context("failed to load config")?,
        };
        debug!(?config, "Configuration loaded");

        let http = HttpClient::with_timeout(config.request_timeout())?;
        let endpoints = Endpoints::new(config.api_base_url.as_str());
        let connectivity = Arc::new(ConnectivityMonitor::new(!cli.offline));
        let favorites: Arc<dyn FavoritesStore> = if cli.ephemeral {
            debug!("Using in-memory favorites");
            Arc::new(MemoryFavoritesStore::new())
        } else {
            Arc::new(FileFavoritesStore::new(config.favorites_path()))
        };

        let feed = Arc::new(PostFeed::new(
            Arc::new(ApiSource::new(http.clone(), endpoints.clone())),
            connectivity.clone(),
            favorites.clone(),
        ));

        Ok(Self {
            config,
            http,
            endpoints,
            connectivity,
            favorites,
            feed,
        })
    }
}

/// Collects the error messages among the events received so far.
pub fn drain_errors(events: &mut broadcast::Receiver<FeedEvent>) -> Vec<String> {
    let mut errors = Vec::new();
    loop {
        match events.try_recv() {
            Ok(FeedEvent::Error(message)) => errors.push(message),
            Ok(_) | Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => return errors,
        }
    }
}
