/// Key-value storage backends for the favorites store
use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;

/// Asynchronous key-value area, modeled on `chrome.storage.local`
///
/// Futures are `!Send`: the extension runs on a single-threaded WASM host.
#[async_trait(?Send)]
pub trait KeyValueStorage {
    /// Look up `key`. `Ok(None)` means the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Replace whatever is stored under `key`.
    async fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Delete `key` entirely. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-process storage, used off-browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any store.
    pub fn with_value(self, key: &str, value: Value) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value);
        self
    }

    /// Raw value currently under `key`.
    pub fn snapshot(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
