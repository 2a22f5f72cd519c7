//! `localStorage` adapter.
//!
//! # Invariants
//! - Quota and access failures are returned, never swallowed.

use stickynote_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Key-value store over the page's `localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Binds to `window.localStorage`.
    ///
    /// # Errors
    /// - `StoreError::Backend` when storage is disabled or access is denied.
    pub fn from_window(window: &Window) -> StoreResult<Self> {
        let storage = window
            .local_storage()
            .map_err(backend_error)?
            .ok_or_else(|| StoreError::Backend("localStorage is unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(backend_error)
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.storage.remove_item(key).map_err(backend_error)
    }
}

fn backend_error(value: JsValue) -> StoreError {
    StoreError::Backend(describe_js_value(&value))
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
