//! Test doubles for the feed's collaborators.

#![allow(dead_code)]

use async_trait::async_trait;
use postfeed_core::{Comment, Post, PostId};
use postfeed_fetch::{FeedSource, FetchError};
use postfeed_store::{ConnectivityMonitor, FavoritesStore, MemoryFavoritesStore, StoreError};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, mpsc};

pub fn posts(ids: impl IntoIterator<Item = u64>) -> Vec<Post> {
    ids.into_iter()
        .map(|id| Post::new(1, id, format!("post {id}"), "body"))
        .collect()
}

pub fn ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}

pub fn comments(post_id: PostId, n: u64) -> Vec<Comment> {
    (1..=n)
        .map(|id| Comment {
            post_id,
            id,
            name: format!("commenter {id}"),
            email: format!("c{id}@example.com"),
            body: "comment".to_string(),
        })
        .collect()
}

pub fn serialization_error() -> FetchError {
    FetchError::from(serde_json::from_str::<Vec<Post>>("not valid json").unwrap_err())
}

// ============================================================================
// Scripted Source
// ============================================================================

/// Returns queued responses in order. An empty queue answers `NoData`.
#[derive(Default)]
pub struct ScriptedSource {
    posts: Mutex<VecDeque<Result<Vec<Post>, FetchError>>>,
    comments: Mutex<VecDeque<Result<Vec<Comment>, FetchError>>>,
    post_calls: AtomicUsize,
    comment_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_posts(&self, result: Result<Vec<Post>, FetchError>) -> &Self {
        self.posts.lock().unwrap().push_back(result);
        self
    }

    pub fn push_comments(&self, result: Result<Vec<Comment>, FetchError>) -> &Self {
        self.comments.lock().unwrap().push_back(result);
        self
    }

    pub fn post_calls(&self) -> usize {
        self.post_calls.load(Ordering::SeqCst)
    }

    pub fn comment_calls(&self) -> usize {
        self.comment_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for ScriptedSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        self.posts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::NoData))
    }

    async fn fetch_comments(&self, _post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        self.comment_calls.fetch_add(1, Ordering::SeqCst);
        self.comments
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(FetchError::NoData))
    }
}

// ============================================================================
// Gated Source
// ============================================================================

/// Each posts request takes the next queued response and waits for its gate
/// before answering. Request start order is reported on `started`.
pub struct GatedSource {
    queue: Mutex<VecDeque<(usize, Arc<Notify>, Vec<Post>)>>,
    started: mpsc::UnboundedSender<usize>,
}

impl GatedSource {
    pub fn new(responses: Vec<Vec<Post>>) -> (Self, Vec<Arc<Notify>>, mpsc::UnboundedReceiver<usize>) {
        let (started, rx) = mpsc::unbounded_channel();
        let gates: Vec<Arc<Notify>> = responses.iter().map(|_| Arc::new(Notify::new())).collect();
        let queue = responses
            .into_iter()
            .zip(gates.iter().cloned())
            .enumerate()
            .map(|(i, (posts, gate))| (i, gate, posts))
            .collect();
        (
            Self {
                queue: Mutex::new(queue),
                started,
            },
            gates,
            rx,
        )
    }
}

#[async_trait]
impl FeedSource for GatedSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let next = self.queue.lock().unwrap().pop_front();
        let Some((index, gate, posts)) = next else {
            return Err(FetchError::NoData);
        };
        let _ = self.started.send(index);
        gate.notified().await;
        Ok(posts)
    }

    async fn fetch_comments(&self, _post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        Err(FetchError::NoData)
    }
}

// ============================================================================
// Connection Lost Mid-Request
// ============================================================================

/// Takes the monitor offline while the posts request is in flight, then fails.
pub struct DisconnectingSource {
    monitor: Arc<ConnectivityMonitor>,
}

impl DisconnectingSource {
    pub fn new(monitor: Arc<ConnectivityMonitor>) -> Self {
        Self { monitor }
    }
}

#[async_trait]
impl FeedSource for DisconnectingSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.monitor.set_connected(false);
        Err(FetchError::NoData)
    }

    async fn fetch_comments(&self, _post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        Err(FetchError::NoData)
    }
}

// ============================================================================
// Favorites Store Doubles
// ============================================================================

/// Memory store whose first save takes `delay` to complete.
pub struct SlowFirstSaveStore {
    inner: MemoryFavoritesStore,
    delay: Duration,
    first: AtomicBool,
}

impl SlowFirstSaveStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryFavoritesStore::new(),
            delay,
            first: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl FavoritesStore for SlowFirstSaveStore {
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        if self.first.swap(false, Ordering::SeqCst) {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.save(posts).await
    }

    async fn load(&self) -> Vec<Post> {
        self.inner.load().await
    }
}

/// Store whose saves always fail.
#[derive(Default)]
pub struct FailingFavoritesStore {
    save_calls: AtomicUsize,
}

impl FailingFavoritesStore {
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FavoritesStore for FailingFavoritesStore {
    async fn save(&self, _posts: &[Post]) -> Result<(), StoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }

    async fn load(&self) -> Vec<Post> {
        Vec::new()
    }
}
