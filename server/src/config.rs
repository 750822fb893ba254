//! Process configuration read from the environment.
//!
//! `PORT` overrides the Leptos `site-addr` (binding `0.0.0.0`, as hosted
//! deployments expect); `GAME_DIR` points at the static game build served
//! under `/game`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub game_dir: PathBuf,
}

impl ServerConfig {
    /// Read `PORT` and `GAME_DIR`, falling back to `default_addr` and the
    /// `game/` directory at the workspace root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("GAME_DIR").ok(),
            default_addr,
        )
    }

    pub(crate) fn from_vars(
        port: Option<String>,
        game_dir: Option<String>,
        default_addr: SocketAddr,
    ) -> Result<Self, ConfigError> {
        let addr = match port.filter(|p| !p.trim().is_empty()) {
            Some(raw) => {
                let port: u16 = raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            None => default_addr,
        };
        let game_dir = game_dir
            .filter(|dir| !dir.is_empty())
            .map_or_else(default_game_dir, PathBuf::from);
        Ok(Self { addr, game_dir })
    }
}

fn default_game_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game")
}
