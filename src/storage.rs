//! Browser Storage
//!
//! `localStorage` as a key-value store, with an in-memory fallback when
//! the page cannot reach it (private mode, disabled storage).

use std::rc::Rc;

use collection_viewer::{KeyValueStore, MemoryStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Store shared by every widget on the page
pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_err(e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Rejected(js_err(e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(js_err(e)))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Rejected(js_err(e)))
    }
}

/// Open `localStorage`, or a session-only store if it is unavailable
pub fn open_store() -> SharedStore {
    match LocalStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("[storage] {}, keeping state in memory", err);
            Rc::new(MemoryStore::new())
        }
    }
}

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
