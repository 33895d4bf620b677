/// Bridge to the extension APIs (`chrome.storage.local`, `chrome.tabs`)
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::error::{StoreError, StoreResult};
use crate::favorite::Favorite;
use crate::storage::KeyValueStorage;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeStorage(key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;
}

/// `chrome.storage.local`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeStorage;

#[async_trait(?Send)]
impl KeyValueStorage for ChromeStorage {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let value_js = getStorage(key)
            .await
            .map_err(|e| StoreError::StorageUnavailable(format!("get {}: {:?}", key, e)))?;

        if value_js.is_null() || value_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value_js)
            .map(Some)
            .map_err(|e| StoreError::CorruptState(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        // Plain objects and arrays, not JS Maps
        let value_js = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StoreError::StorageUnavailable(format!("convert {}: {:?}", key, e)))?;

        setStorage(key, value_js)
            .await
            .map_err(|e| StoreError::StorageUnavailable(format!("set {}: {:?}", key, e)))
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        removeStorage(key)
            .await
            .map_err(|e| StoreError::StorageUnavailable(format!("remove {}: {:?}", key, e)))
    }
}

#[derive(Debug, Deserialize)]
struct ActiveTab {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// Title and URL of the active tab in the current window
pub async fn current_page() -> Result<Favorite, String> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| format!("Failed to get active tab: {:?}", e))?;

    let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js)
        .map_err(|e| format!("Failed to parse tab: {:?}", e))?;

    let url = tab.url.ok_or_else(|| "Active tab has no URL".to_string())?;
    Ok(Favorite::new(tab.title.unwrap_or_default(), url))
}

/// Open each URL in a new tab, in order
pub async fn open_tabs(urls: &[String]) -> Result<(), String> {
    for url in urls {
        openTab(url)
            .await
            .map_err(|e| format!("Failed to open {}: {:?}", url, e))?;
    }
    Ok(())
}
