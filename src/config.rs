/// Store configuration
use serde::{Deserialize, Serialize};

/// Key the favorites array lives under in `chrome.storage.local`
pub const DEFAULT_STORAGE_KEY: &str = "skebWorkFavorites";
/// Only pages on this host can be favorited
pub const DEFAULT_SITE_HOST: &str = "skeb.jp";
/// Favorites shown per popup page
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub storage_key: String,
    pub site_host: String,
    pub page_size: usize,
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_site_host(mut self, host: impl Into<String>) -> Self {
        self.site_host = host.into();
        self
    }

    /// Zero is bumped to one so pagination always makes progress.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            site_host: DEFAULT_SITE_HOST.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
