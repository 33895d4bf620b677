/// The favorites store: list, add, remove, clear and open-all over a key-value area
///
/// Storage is the only source of truth. Every operation re-reads the stored
/// list, applies its change and writes the whole list back. Operations issued
/// through one store are serialized, so two quick clicks cannot interleave
/// their read and write phases and drop each other's update.
use futures_util::lock::Mutex;
use log::{debug, info, warn};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::favorite::{Favorite, FavoritesList};
use crate::identity::{IdentityKey, is_supported_site};
use crate::storage::KeyValueStorage;

pub struct FavoritesStore<S> {
    storage: S,
    config: StoreConfig,
    queue: Mutex<()>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        FavoritesStore {
            storage,
            config,
            queue: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current favorites, oldest first. Absent data is an empty list.
    pub async fn list(&self) -> StoreResult<FavoritesList> {
        let _turn = self.queue.lock().await;
        self.load().await
    }

    /// Append `candidate` and return the resulting list.
    ///
    /// Off-site URLs and entries whose identity is already stored leave the
    /// list untouched; the existing entry (and its title) wins.
    pub async fn add(&self, candidate: Favorite) -> StoreResult<FavoritesList> {
        let _turn = self.queue.lock().await;
        let mut list = self.load().await?;

        if !is_supported_site(&candidate.url, &self.config.site_host) {
            debug!("Ignoring off-site favorite: {}", candidate.url);
            return Ok(list);
        }

        let url = candidate.url.clone();
        if !list.push_unique(candidate) {
            debug!("Already favorited: {}", url);
            return Ok(list);
        }

        self.save(&list).await?;
        info!("Added favorite {} ({} total)", url, list.len());
        Ok(list)
    }

    /// Remove every entry with the same identity as `target_url`.
    ///
    /// Work-ID URLs match regardless of query string; other URLs match exactly.
    pub async fn remove(&self, target_url: &str) -> StoreResult<FavoritesList> {
        let _turn = self.queue.lock().await;
        let mut list = self.load().await?;

        let removed = list.remove_identity(&IdentityKey::from_url(target_url));
        if removed == 0 {
            debug!("Nothing to remove for {}", target_url);
            return Ok(list);
        }

        self.save(&list).await?;
        info!("Removed {} favorite(s) matching {}", removed, target_url);
        Ok(list)
    }

    /// Delete the stored list entirely.
    pub async fn clear(&self) -> StoreResult<()> {
        let _turn = self.queue.lock().await;
        self.storage.remove(&self.config.storage_key).await?;
        info!("Cleared all favorites");
        Ok(())
    }

    /// URLs to open as new tabs, in list order.
    pub async fn open_all(&self) -> StoreResult<Vec<String>> {
        Ok(self.list().await?.urls())
    }

    async fn load(&self) -> StoreResult<FavoritesList> {
        let stored = match self.storage.get(&self.config.storage_key).await {
            Ok(stored) => stored,
            Err(StoreError::CorruptState(e)) => {
                warn!("Corrupt stored favorites: {}; treating favorites as empty", e);
                return Ok(FavoritesList::new());
            }
            Err(e) => return Err(e),
        };

        match stored {
            None | Some(Value::Null) => Ok(FavoritesList::new()),
            Some(value) => match decode_list(value) {
                Ok(list) => {
                    debug!("Loaded {} favorite(s)", list.len());
                    Ok(list)
                }
                Err(e) => {
                    warn!("{}; treating favorites as empty", e);
                    Ok(FavoritesList::new())
                }
            },
        }
    }

    async fn save(&self, list: &FavoritesList) -> StoreResult<()> {
        let value = serde_json::to_value(list)?;
        self.storage.set(&self.config.storage_key, value).await
    }
}

/// Decode the stored array entry by entry; one malformed record only drops itself.
fn decode_list(value: Value) -> StoreResult<FavoritesList> {
    let Value::Array(entries) = value else {
        return Err(StoreError::CorruptState("expected an array".to_string()));
    };

    let total = entries.len();
    let favorites: Vec<Favorite> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Favorite>(entry) {
            Ok(favorite) => Some(favorite),
            Err(e) => {
                warn!("Skipping malformed favorite: {}", e);
                None
            }
        })
        .collect();

    if favorites.len() < total {
        warn!("Dropped {} of {} stored favorite(s)", total - favorites.len(), total);
    }
    Ok(FavoritesList::from(favorites))
}
