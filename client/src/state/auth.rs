//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the stored session so the navigation bar and pages can render
//! identity-dependent links without reading `localStorage` on every render.
//! The stored session stays the source of truth; this state is refreshed
//! after login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Session, SessionStore};

/// Authentication state tracking the stored session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// `true` until the stored session has been read in the browser.
    pub loading: bool,
}

impl AuthState {
    /// State rendered on the server and before hydration completes.
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    pub fn from_store(store: &dyn SessionStore) -> Self {
        Self { session: store.load(), loading: false }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Username of the stored session, if it has a non-empty one.
    pub fn username(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.username.as_str())
            .filter(|name| !name.is_empty())
    }
}
