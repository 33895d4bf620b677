/// Skeb Favorites - Chrome Extension for bookmarking skeb.jp works
/// Built with Rust + WASM + Yew

mod chrome;
pub mod config;
pub mod error;
pub mod favorite;
pub mod identity;
pub mod storage;
pub mod store;
pub mod ui;
pub mod view;

use wasm_bindgen::prelude::*;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use favorite::{Favorite, FavoritesList};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::FavoritesStore;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the identity rule for JavaScript access
#[wasm_bindgen]
pub fn work_id(url: &str) -> Option<String> {
    identity::extract_work_id(url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
