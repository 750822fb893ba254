//! Session persistence.
//!
//! DESIGN
//! ======
//! Pages receive a [`SessionStore`] instead of reaching into global storage.
//! The browser keeps the session as three string entries (`userId`, `token`,
//! `username`) in `localStorage`; [`KeyValueSessionStore`] maps that layout
//! onto any [`KeyValueStorage`] and keeps the entries consistent: a session
//! is loaded only when both id and token are present, and a failed save
//! removes whatever was partially written.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use tracing::warn;

use crate::error::SessionStoreError;
use crate::types::Session;

pub const USER_ID_KEY: &str = "userId";
pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// Explicit session lifecycle: `load` / `save` / `clear`.
pub trait SessionStore {
    /// The stored session, if both the id and the token are present.
    fn load(&self) -> Option<Session>;

    /// Persist all three session entries.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the backend rejects the write. The
    /// store is left empty in that case.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove all three session entries. Never fails.
    fn clear(&self);
}

/// Minimal string key-value backend, shaped after `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the value cannot be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    fn remove(&self, key: &str);
}

/// [`SessionStore`] over three entries of a [`KeyValueStorage`].
#[derive(Debug, Default)]
pub struct KeyValueSessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> KeyValueSessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> SessionStore for KeyValueSessionStore<S> {
    fn load(&self) -> Option<Session> {
        let session = Session {
            user_id: self.storage.get(USER_ID_KEY)?,
            token: self.storage.get(TOKEN_KEY)?,
            username: self.storage.get(USERNAME_KEY).unwrap_or_default(),
        };
        session.is_complete().then_some(session)
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let entries = [
            (USER_ID_KEY, session.user_id.as_str()),
            (TOKEN_KEY, session.token.as_str()),
            (USERNAME_KEY, session.username.as_str()),
        ];
        for (key, value) in entries {
            if let Err(error) = self.storage.set(key, value) {
                warn!(key, error = %error, "session write failed; clearing partial session");
                self.clear();
                return Err(error);
            }
        }
        Ok(())
    }

    fn clear(&self) {
        for key in [USER_ID_KEY, TOKEN_KEY, USERNAME_KEY] {
            self.storage.remove(key);
        }
    }
}

/// In-process [`KeyValueStorage`], used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Session store held in memory for the lifetime of the process.
pub type MemorySessionStore = KeyValueSessionStore<MemoryStorage>;
