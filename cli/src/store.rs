//! Session persistence for the command line: one JSON file.
//!
//! The file holds the same three fields the browser keeps in `localStorage`
//! (`userId`, `token`, `username`).

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use session::{Session, SessionStore, SessionStoreError};
use tracing::{debug, warn};

const SESSION_DIR: &str = ".hopbunny";
const SESSION_FILE: &str = "session.json";

/// `$HOME/.hopbunny/session.json`, if `HOME` is set.
pub fn default_session_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").filter(|home| !home.is_empty())?;
    Some(PathBuf::from(home).join(SESSION_DIR).join(SESSION_FILE))
}

#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionStoreError::Io(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(session).map_err(|e| SessionStoreError::Io(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| SessionStoreError::Io(e.to_string()))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_complete() => Some(session),
            Ok(_) => None,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "ignoring unreadable session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Err(error) = self.write(session) {
            warn!(path = %self.path.display(), %error, "session write failed; clearing partial session");
            self.clear();
            return Err(error);
        }
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "session cleared"),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => warn!(path = %self.path.display(), %error, "could not remove session file"),
        }
    }
}
