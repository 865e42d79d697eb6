//! Configuration management.

use postfeed_fetch::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::{default_config_path, default_favorites_path, load_json, save_json};

/// Environment variable overriding [`FeedConfig::api_base_url`].
pub const BASE_URL_ENV: &str = "POSTFEED_API_BASE_URL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL of the posts API.
    pub api_base_url: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Where favorites are persisted. `None` uses the platform data dir.
    pub favorites_path: Option<PathBuf>,
    /// Interval between connectivity probes in seconds.
    pub connectivity_probe_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            favorites_path: None,
            connectivity_probe_secs: 15,
        }
    }
}

impl FeedConfig {
    /// Loads configuration from the default path.
    pub async fn load() -> Result<Self, StoreError> {
        Self::load_from(&default_config_path()).await
    }

    /// Loads configuration from a specific path, then applies environment
    /// overrides. A missing file yields the defaults.
    pub async fn load_from(path: &Path) -> Result<Self, StoreError> {
        let mut config = if tokio::fs::try_exists(path).await? {
            let config: FeedConfig = load_json(path).await?;
            info!(path = %path.display(), "Loaded configuration");
            config
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Self::default()
        };

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.api_base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a specific path.
    pub async fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        save_json(path, self).await?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Checks values that would make the feed unusable.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.api_base_url.trim().is_empty() {
            return Err(StoreError::Config("api_base_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(StoreError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.connectivity_probe_secs == 0 {
            return Err(StoreError::Config(
                "connectivity_probe_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the connectivity probe interval.
    pub fn connectivity_probe_interval(&self) -> Duration {
        Duration::from_secs(self.connectivity_probe_secs)
    }

    /// Returns the favorites file path, falling back to the platform default.
    pub fn favorites_path(&self) -> PathBuf {
        self.favorites_path
            .clone()
            .unwrap_or_else(default_favorites_path)
    }
}
