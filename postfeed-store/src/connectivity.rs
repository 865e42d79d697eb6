//! Network connectivity collaborator.
//!
//! The feed reads the current value when it refreshes and subscribes to
//! changes so it can react when the connection drops or comes back.

use postfeed_fetch::HttpClient;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Source of the "is the device online" signal.
pub trait Connectivity: Send + Sync {
    /// Returns the current connectivity.
    fn is_connected(&self) -> bool;

    /// Subscribes to connectivity changes. The receiver only wakes on edges.
    fn subscribe(&self) -> watch::Receiver<bool>;
}

// ============================================================================
// Connectivity Monitor
// ============================================================================

/// Connectivity state shared between whoever observes the network and the
/// feeds that depend on it.
///
/// Constructed explicitly by the composition root and passed to consumers.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    state: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    /// Creates a monitor with an initial connectivity value.
    pub fn new(connected: bool) -> Self {
        let (state, _) = watch::channel(connected);
        Self { state }
    }

    /// Records the current connectivity. Subscribers are only notified when
    /// the value actually changes. Returns whether it changed.
    pub fn set_connected(&self, connected: bool) -> bool {
        let changed = self.state.send_if_modified(|current| {
            if *current == connected {
                false
            } else {
                *current = connected;
                true
            }
        });
        if changed {
            info!(connected, "Connectivity changed");
        }
        changed
    }

    /// Spawns a task that probes `url` every `interval` and records the result.
    ///
    /// The task stops once the monitor is dropped.
    pub fn spawn_probe(
        self: &std::sync::Arc<Self>,
        http: HttpClient,
        url: String,
        interval: Duration,
    ) -> JoinHandle<()> {
        let monitor = std::sync::Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let reachable = http.probe(&url).await;
                let Some(monitor) = monitor.upgrade() else {
                    debug!("Connectivity monitor dropped, stopping probe");
                    break;
                };
                monitor.set_connected(reachable);
            }
        })
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for ConnectivityMonitor {
    fn is_connected(&self) -> bool {
        *self.state.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}
