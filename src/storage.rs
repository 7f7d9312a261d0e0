//! Browser Adapters
//!
//! `localStorage` as a [`KeyValueStore`] and `Date.now()` as a [`Clock`].

use todo_core::{Clock, KeyValueStore, MemoryStore, StorageError, StorageResult};
use wasm_bindgen::{JsCast, JsValue};

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(storage_error)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(storage_error)
    }
}

fn storage_error(err: JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StorageError::QuotaExceeded,
        Some(ex) if ex.name() == "SecurityError" => StorageError::Unavailable,
        Some(ex) => StorageError::Backend(format!("{}: {}", ex.name(), ex.message())),
        None => StorageError::Backend(format!("{:?}", err)),
    }
}

/// `localStorage` when the browser allows it, otherwise an in-memory store
/// that lasts for this page load
pub fn open_storage() -> Box<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(error) => {
            tracing::warn!(%error, "localStorage unavailable, state will not survive reload");
            Box::new(MemoryStore::new())
        }
    }
}

/// Wall clock from `Date.now()`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
