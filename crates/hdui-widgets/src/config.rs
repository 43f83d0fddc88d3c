#![forbid(unsafe_code)]

//! List tuning as data.
//!
//! [`ListConfig`] gathers the knobs of the list widgets so a feed can be
//! tuned without recompiling. With the `config` feature it loads from TOML
//! or JSON; missing fields take their defaults.
//!
//! ```toml
//! # hdui-list.toml
//! item_height = 3
//! overscan = 8
//! load_more_threshold = 12.0
//! ```
//!
//! ```rust,ignore
//! let config = ListConfig::from_toml_file("hdui-list.toml")?;
//! let list = VirtualizedList::new(&posts, draw_post).config(&config);
//! ```

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::infinite_scroll::{DEFAULT_LOAD_MORE_THRESHOLD, InfiniteScroll};
use crate::pull_to_refresh::{DEFAULT_PULL_THRESHOLD, PullToRefresh};
use crate::virtual_scroll::{DEFAULT_IDLE_TIMEOUT, VirtualScroll};
use crate::window::{DEFAULT_OVERSCAN, WindowError, WindowMetrics};

/// Tunable parameters shared by the list widgets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ListConfig {
    /// Uniform item height in rows. Default: 1.
    pub item_height: u16,
    /// Items mounted beyond each edge of the viewport. Default: 5.
    pub overscan: usize,
    /// Draw a scrollbar column when the content overflows. Default: true.
    pub show_scrollbar: bool,
    /// Quiet period after which scrolling counts as stopped. Default: 150ms.
    pub scroll_idle_ms: u64,
    /// Distance from the end that triggers the next page. Default: 200.
    pub load_more_threshold: f64,
    /// Pull distance that arms a refresh. Default: 80.
    pub pull_threshold: f64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 1,
            overscan: DEFAULT_OVERSCAN,
            show_scrollbar: true,
            scroll_idle_ms: DEFAULT_IDLE_TIMEOUT.as_millis() as u64,
            load_more_threshold: DEFAULT_LOAD_MORE_THRESHOLD,
            pull_threshold: DEFAULT_PULL_THRESHOLD,
        }
    }
}

impl ListConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check every parameter. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.item_height == 0 {
            errors.push("item_height must be > 0".into());
        }
        if self.scroll_idle_ms == 0 {
            errors.push("scroll_idle_ms must be > 0".into());
        }
        if !self.load_more_threshold.is_finite() || self.load_more_threshold < 0.0 {
            errors.push(format!(
                "load_more_threshold must be finite and >= 0, got {}",
                self.load_more_threshold
            ));
        }
        if !self.pull_threshold.is_finite() || self.pull_threshold <= 0.0 {
            errors.push(format!(
                "pull_threshold must be finite and > 0, got {}",
                self.pull_threshold
            ));
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) passes, else
    /// [`ConfigError::Invalid`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    #[must_use]
    pub fn scroll_idle(&self) -> Duration {
        Duration::from_millis(self.scroll_idle_ms)
    }

    /// Window metrics for a container of `container_height` rows.
    #[must_use]
    pub fn window_metrics(&self, container_height: f64) -> WindowMetrics {
        WindowMetrics::new(f64::from(self.item_height), container_height)
            .with_overscan(self.overscan)
    }

    /// Headless scroll state for `len` items in a `container_height` viewport.
    pub fn virtual_scroll(
        &self,
        len: usize,
        container_height: f64,
    ) -> Result<VirtualScroll, WindowError> {
        Ok(
            VirtualScroll::new(len, f64::from(self.item_height), container_height)?
                .with_overscan(self.overscan)
                .with_idle_timeout(self.scroll_idle()),
        )
    }

    #[must_use]
    pub fn infinite_scroll(&self) -> InfiniteScroll {
        InfiniteScroll::new().threshold(self.load_more_threshold)
    }

    #[must_use]
    pub fn pull_to_refresh(&self) -> PullToRefresh {
        PullToRefresh::new().threshold(self.pull_threshold)
    }
}

/// Errors that can occur when loading a list configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Invalid(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Invalid(errors) => write!(f, "invalid list config: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}
