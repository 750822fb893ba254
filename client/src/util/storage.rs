//! Browser `localStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only storage access so pages receive a
//! [`SessionStore`](session::SessionStore) instead of repeating web-sys glue.
//! During SSR there is no storage: reads see nothing and writes fail with
//! [`SessionStoreError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{KeyValueSessionStore, KeyValueStorage, SessionStoreError};

/// [`KeyValueStorage`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

pub type BrowserSessionStore = KeyValueSessionStore<BrowserStorage>;

/// Session store backed by the browser's `localStorage`.
pub fn session_store() -> BrowserSessionStore {
    KeyValueSessionStore::new(BrowserStorage)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SessionStoreError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| SessionStoreError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(SessionStoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
