//! Persisted favorites.
//!
//! Favorites are stored as one snapshot under a fixed key. Every save
//! replaces the whole snapshot; there are no incremental updates.

use async_trait::async_trait;
use postfeed_core::Post;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::persistence::{load_json, load_json_or_default, save_json};

/// Key under which the favorites snapshot is stored.
pub const FAVORITES_KEY: &str = "favoritePosts";

/// Storage for the favorites snapshot.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Replaces the stored snapshot with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;

    /// Returns the stored snapshot, or an empty list if there is none or it
    /// cannot be decoded.
    async fn load(&self) -> Vec<Post>;
}

// ============================================================================
// File Store
// ============================================================================

/// Favorites kept in a JSON key/value file.
///
/// Other keys in the same file are preserved on save. Saves through the
/// same store (or its clones) run one at a time.
#[derive(Debug, Clone)]
pub struct FileFavoritesStore {
    path: PathBuf,
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

impl FileFavoritesStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl FavoritesStore for FileFavoritesStore {
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries: HashMap<String, Value> = load_json_or_default(&self.path).await;
        entries.insert(FAVORITES_KEY.to_string(), serde_json::to_value(posts)?);
        save_json(&self.path, &entries).await?;
        debug!(path = %self.path.display(), count = posts.len(), "Saved favorites");
        Ok(())
    }

    async fn load(&self) -> Vec<Post> {
        let mut entries: HashMap<String, Value> = match load_json(&self.path).await {
            Ok(entries) => entries,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read favorites");
                return Vec::new();
            }
        };

        let Some(snapshot) = entries.remove(FAVORITES_KEY) else {
            return Vec::new();
        };

        serde_json::from_value(snapshot).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Favorites snapshot is corrupt");
            Vec::new()
        })
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// Favorites kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryFavoritesStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryFavoritesStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `posts`.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        *self.posts.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = posts.to_vec();
        Ok(())
    }

    async fn load(&self) -> Vec<Post> {
        self.posts
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}
