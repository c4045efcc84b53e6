//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! pick up `EEUM_DEV` and `EEUM_BASE_URL`.
//!
//! # Example
//!
//! ```ignore
//! use eeum::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_dev_mode(true)
//!     .with_page_size(10);
//! assert_eq!(config.base_url(), "https://eeum.xyz/dev");
//! ```

use std::path::PathBuf;

use crate::events::DEFAULT_EVENT_CAPACITY;

pub const RELEASE_BASE_URL: &str = "https://eeum.xyz";
pub const DEV_BASE_URL: &str = "https://eeum.xyz/dev";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Set to anything but `0`/`false` to target the dev backend.
pub const DEV_ENV: &str = "EEUM_DEV";
/// Overrides the base URL in either mode.
pub const BASE_URL_ENV: &str = "EEUM_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Target the dev backend.
    pub dev_mode: bool,
    /// Explicit base URL, wins over `dev_mode`.
    pub base_url_override: Option<String>,
    /// Ing/Done cursor page size.
    pub page_size: u32,
    /// Size of the single liked-posts page.
    pub liked_page_size: u32,
    /// Maximum songs per music search.
    pub search_limit: u32,
    /// Broadcast capacity of the post event bus.
    pub event_capacity: usize,
    /// Preferences file for the token; `None` uses `~/.eeum/preferences.json`.
    pub token_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            base_url_override: None,
            page_size: DEFAULT_PAGE_SIZE,
            liked_page_size: DEFAULT_PAGE_SIZE,
            search_limit: DEFAULT_PAGE_SIZE,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            token_path: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        match &self.base_url_override {
            Some(url) => url,
            None if self.dev_mode => DEV_BASE_URL,
            None => RELEASE_BASE_URL,
        }
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url_override = Some(url.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_liked_page_size(mut self, page_size: u32) -> Self {
        self.liked_page_size = page_size;
        self
    }

    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dev_mode = lookup(DEV_ENV)
            .map(|v| !matches!(v.trim(), "" | "0" | "false"))
            .unwrap_or(false);
        let config = Self::default().with_dev_mode(dev_mode);

        match lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_base_url(url.trim()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), RELEASE_BASE_URL);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.liked_page_size, 20);
        assert_eq!(config.search_limit, 20);
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
        assert!(config.token_path.is_none());
    }

    #[test]
    fn test_dev_flag() {
        assert_eq!(
            ClientConfig::from_lookup(lookup_from(&[("EEUM_DEV", "1")])).base_url(),
            DEV_BASE_URL
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup_from(&[("EEUM_DEV", "0")])).base_url(),
            RELEASE_BASE_URL
        );
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("EEUM_DEV", "1"),
            ("EEUM_BASE_URL", "http://localhost:8080"),
        ]));
        assert!(config.dev_mode);
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_page_size(5)
            .with_search_limit(3)
            .with_token_path("/tmp/prefs.json");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.search_limit, 3);
        assert_eq!(config.token_path, Some(PathBuf::from("/tmp/prefs.json")));
    }
}
