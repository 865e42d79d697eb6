//! Post feed state manager.
//!
//! Owns the posts shown to the user and mediates between the feed source,
//! the connectivity signal, and the persisted favorites. Listeners observe
//! changes through a broadcast channel of [`FeedEvent`]s.
//!
//! State is only mutated after a fetch has completed, inside one write-lock
//! section, and the matching event is sent afterwards. Concurrent refreshes
//! are not de-duplicated: whichever response arrives last replaces the feed,
//! even if it was requested first.

use chrono::{DateTime, Utc};
use postfeed_core::{CAROUSEL_SIZE, Comment, Post, PostId, split_feed, sort_by_favorites};
use postfeed_fetch::{FeedSource, FetchError};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::comments::CommentThread;
use crate::connectivity::Connectivity;
use crate::favorites::FavoritesStore;

/// Capacity of the event channel. Slow listeners lag rather than block.
const EVENT_CAPACITY: usize = 64;

// ============================================================================
// Feed State & Events
// ============================================================================

/// Lifecycle of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedState {
    /// Nothing loaded yet.
    #[default]
    Empty,
    /// A posts fetch is in flight.
    Loading,
    /// Showing posts from the network.
    Loaded,
    /// Showing the persisted favorites because the device is offline.
    OfflineFallback,
}

impl FeedState {
    /// Returns the display name for this state.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::OfflineFallback => "offline",
        }
    }
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Notification sent to feed listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The posts (or their order or flags) changed.
    PostsUpdated,
    /// The comment thread changed.
    CommentsUpdated,
    /// An operation failed; carries a message fit for the user.
    Error(String),
}

// ============================================================================
// Inner State
// ============================================================================

#[derive(Debug, Default)]
struct FeedInner {
    posts: Vec<Post>,
    thread: CommentThread,
    state: FeedState,
    last_updated: Option<DateTime<Utc>>,
}

impl FeedInner {
    fn favorites(&self) -> Vec<Post> {
        self.posts.iter().filter(|p| p.is_favourite).cloned().collect()
    }
}

// ============================================================================
// Post Feed
// ============================================================================

/// Single source of truth for the post feed.
pub struct PostFeed {
    source: Arc<dyn FeedSource>,
    connectivity: Arc<dyn Connectivity>,
    favorites: Arc<dyn FavoritesStore>,
    inner: RwLock<FeedInner>,
    /// Held from taking a favorites snapshot until it is saved, so saves
    /// land in the same order as the toggles that produced them.
    persist: Mutex<()>,
    events: broadcast::Sender<FeedEvent>,
}

impl PostFeed {
    /// Creates an empty feed wired to its collaborators.
    pub fn new(
        source: Arc<dyn FeedSource>,
        connectivity: Arc<dyn Connectivity>,
        favorites: Arc<dyn FavoritesStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            source,
            connectivity,
            favorites,
            inner: RwLock::new(FeedInner::default()),
            persist: Mutex::new(()),
            events,
        }
    }

    /// Subscribes to feed events.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: FeedEvent) {
        // No listeners is fine.
        let _ = self.events.send(event);
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Reloads the feed.
    ///
    /// Online, the posts are fetched and replace the feed wholesale. On
    /// failure an [`FeedEvent::Error`] is sent and the previous posts stay.
    /// Offline, no request is made and the persisted favorites are shown.
    ///
    /// Returns the state the feed ends up in.
    pub async fn refresh(&self) -> FeedState {
        self.refresh_with(self.connectivity.is_connected()).await
    }

    async fn refresh_with(&self, is_connected: bool) -> FeedState {
        if !is_connected {
            info!("Offline, skipping fetch");
            return self.show_offline_favorites().await;
        }

        let previous = self.begin_loading().await;
        let result = self.source.fetch_posts().await;
        self.finish_loading(result, previous).await
    }

    /// Runs [`refresh`](Self::refresh) on a background task.
    ///
    /// The task only holds a weak reference while the request is in flight;
    /// if the feed is dropped before the response arrives, the response is
    /// discarded.
    pub fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<()> {
        let feed = Arc::downgrade(self);
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            let previous = {
                let Some(feed) = feed.upgrade() else { return };
                if !feed.connectivity.is_connected() {
                    feed.show_offline_favorites().await;
                    return;
                }
                feed.begin_loading().await
            };

            let result = source.fetch_posts().await;

            let Some(feed) = upgrade_or_log(&feed, "posts") else {
                return;
            };
            feed.finish_loading(result, previous).await;
        })
    }

    async fn begin_loading(&self) -> FeedState {
        let mut inner = self.inner.write().await;
        let previous = inner.state;
        inner.state = FeedState::Loading;
        debug!(%previous, "Loading posts");
        previous
    }

    async fn finish_loading(
        &self,
        result: Result<Vec<Post>, FetchError>,
        previous: FeedState,
    ) -> FeedState {
        match result {
            Ok(mut posts) => {
                self.restore_favorite_flags(&mut posts).await;
                let state = {
                    let mut inner = self.inner.write().await;
                    inner.posts = posts;
                    inner.state = FeedState::Loaded;
                    inner.last_updated = Some(Utc::now());
                    info!(count = inner.posts.len(), "Feed loaded");
                    inner.state
                };
                self.emit(FeedEvent::PostsUpdated);
                state
            }
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "Failed to fetch posts");
                self.emit(FeedEvent::Error(e.user_message()));

                if !self.connectivity.is_connected() {
                    return self.show_offline_favorites().await;
                }

                let mut inner = self.inner.write().await;
                if inner.state == FeedState::Loading {
                    inner.state = previous;
                }
                inner.state
            }
        }
    }

    /// Marks fetched posts that are in the persisted favorites snapshot.
    async fn restore_favorite_flags(&self, posts: &mut [Post]) {
        let saved: HashSet<PostId> = self.favorites.load().await.iter().map(|p| p.id).collect();
        if saved.is_empty() {
            return;
        }
        for post in posts.iter_mut() {
            post.is_favourite = saved.contains(&post.id);
        }
    }

    /// Replaces the feed with the persisted favorites snapshot.
    async fn show_offline_favorites(&self) -> FeedState {
        let saved = self.favorites.load().await;
        {
            let mut inner = self.inner.write().await;
            info!(count = saved.len(), "Showing offline favorites");
            inner.posts = saved;
            inner.state = FeedState::OfflineFallback;
        }
        self.emit(FeedEvent::PostsUpdated);
        FeedState::OfflineFallback
    }

    // ========================================================================
    // Connectivity
    // ========================================================================

    /// Reacts to a connectivity change.
    ///
    /// Coming online triggers a refresh; going offline swaps in the persisted
    /// favorites without touching the network.
    pub async fn on_connectivity_changed(&self, is_connected: bool) -> FeedState {
        info!(is_connected, "Connectivity changed");
        self.refresh_with(is_connected).await
    }

    /// Spawns a task forwarding connectivity changes to
    /// [`on_connectivity_changed`](Self::on_connectivity_changed).
    ///
    /// The task ends when the connectivity source goes away, or on the next
    /// change after the feed has been dropped.
    pub fn watch_connectivity(self: &Arc<Self>) -> JoinHandle<()> {
        let mut rx = self.connectivity.subscribe();
        let feed = Arc::downgrade(self);

        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let connected = *rx.borrow_and_update();
                let Some(feed) = upgrade_or_log(&feed, "connectivity change") else {
                    break;
                };
                feed.on_connectivity_changed(connected).await;
            }
        })
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    /// Flips the favorite flag of the post with `post_id`, persists the
    /// resulting favorites and re-sorts the list.
    ///
    /// Returns the new flag, or `None` (and does nothing) if no post has
    /// that id.
    pub async fn toggle_favorite(&self, post_id: PostId) -> Option<bool> {
        let persist = self.persist.lock().await;
        let (is_favourite, snapshot) = {
            let mut inner = self.inner.write().await;
            let Some(post) = inner.posts.iter_mut().find(|p| p.id == post_id) else {
                debug!(post_id, "Toggle ignored, post not in feed");
                return None;
            };
            let is_favourite = post.toggle_favourite();
            sort_by_favorites(&mut inner.posts, CAROUSEL_SIZE);
            (is_favourite, inner.favorites())
        };

        info!(post_id, is_favourite, "Favorite toggled");

        if let Err(e) = self.favorites.save(&snapshot).await {
            warn!(error = %e, "Failed to persist favorites");
            self.emit(FeedEvent::Error(
                "Your favorites could not be saved.".to_string(),
            ));
        }
        drop(persist);

        self.emit(FeedEvent::PostsUpdated);
        Some(is_favourite)
    }

    /// Moves favorites to the front of the list part of the feed. The
    /// carousel keeps its order.
    pub async fn sort_by_favorites(&self) {
        {
            let mut inner = self.inner.write().await;
            sort_by_favorites(&mut inner.posts, CAROUSEL_SIZE);
        }
        self.emit(FeedEvent::PostsUpdated);
    }

    /// Returns the favorited posts currently in the feed.
    pub async fn favorites(&self) -> Vec<Post> {
        self.inner.read().await.favorites()
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Fetches the comments of `post_id` into the comment thread.
    pub async fn fetch_comments(&self, post_id: PostId) {
        let result = self.source.fetch_comments(post_id).await;
        self.finish_comments(post_id, result).await;
    }

    /// Runs [`fetch_comments`](Self::fetch_comments) on a background task,
    /// discarding the response if the feed is dropped first.
    pub fn spawn_fetch_comments(self: &Arc<Self>, post_id: PostId) -> JoinHandle<()> {
        let feed: Weak<Self> = Arc::downgrade(self);
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            let result = source.fetch_comments(post_id).await;
            if let Some(feed) = upgrade_or_log(&feed, "comments") {
                feed.finish_comments(post_id, result).await;
            }
        })
    }

    async fn finish_comments(&self, post_id: PostId, result: Result<Vec<Comment>, FetchError>) {
        match result {
            Ok(comments) => {
                debug!(post_id, count = comments.len(), "Comments loaded");
                self.inner.write().await.thread.replace(post_id, comments);
                self.emit(FeedEvent::CommentsUpdated);
            }
            Err(e) => {
                warn!(post_id, kind = %e.kind(), error = %e, "Failed to fetch comments");
                self.emit(FeedEvent::Error(e.user_message()));
            }
        }
    }

    /// Flips the expansion of the comment at `index`.
    ///
    /// Returns the new state, or `None` if `index` is out of range.
    pub async fn toggle_comment(&self, index: usize) -> Option<bool> {
        let expanded = self.inner.write().await.thread.toggle(index)?;
        self.emit(FeedEvent::CommentsUpdated);
        Some(expanded)
    }

    /// Returns true if the comment at `index` is expanded.
    pub async fn is_comment_expanded(&self, index: usize) -> bool {
        self.inner.read().await.thread.is_expanded(index)
    }

    /// Returns the loaded comments.
    pub async fn comments(&self) -> Vec<Comment> {
        self.inner.read().await.thread.comments().to_vec()
    }

    /// Returns a copy of the comment thread.
    pub async fn comment_thread(&self) -> CommentThread {
        self.inner.read().await.thread.clone()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns all posts in feed order.
    pub async fn posts(&self) -> Vec<Post> {
        self.inner.read().await.posts.clone()
    }

    /// Returns the carousel posts.
    pub async fn top_posts(&self) -> Vec<Post> {
        split_feed(&self.inner.read().await.posts).0.to_vec()
    }

    /// Returns the list posts.
    pub async fn remaining_posts(&self) -> Vec<Post> {
        split_feed(&self.inner.read().await.posts).1.to_vec()
    }

    /// Returns the post with `post_id`, if present.
    pub async fn post(&self, post_id: PostId) -> Option<Post> {
        self.inner
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    /// Returns the current state.
    pub async fn state(&self) -> FeedState {
        self.inner.read().await.state
    }

    /// Returns when posts were last loaded from the network.
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.read().await.last_updated
    }

    /// Returns the current connectivity as seen by this feed.
    pub fn is_connected(&self) -> bool {
        self.connectivity.is_connected()
    }
}

impl fmt::Debug for PostFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostFeed").finish_non_exhaustive()
    }
}

fn upgrade_or_log(feed: &Weak<PostFeed>, what: &str) -> Option<Arc<PostFeed>> {
    let feed = feed.upgrade();
    if feed.is_none() {
        debug!(what, "Feed dropped, discarding late completion");
    }
    feed
}
