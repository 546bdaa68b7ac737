//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It is a zero-size handle that looks up `window.localStorage` on every call,
//! so it is trivially `Clone`, `Send` and `Sync` even though `web_sys::Storage`
//! is not.
//!
//! Errors (storage disabled, quota exceeded, private mode) are logged and
//! swallowed. Reads then return `None`, which the session layer treats as
//! "not logged in".

use crate::vault::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, not persisting {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("localStorage write for {key} failed: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("localStorage remove for {key} failed: {e:?}");
            }
        }
    }
}
