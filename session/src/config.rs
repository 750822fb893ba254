//! API endpoint configuration and host-based resolution.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use tracing::debug;

/// Base URL of a backend running on the developer machine.
pub const LOCAL_API_URL: &str = "http://localhost:3001/api";
/// Base URL of the deployed backend.
pub const PRODUCTION_API_URL: &str = "https://hop-bunny-backend.vercel.app/api";

/// Which backend a host talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    /// `localhost`, `127.0.0.1*` and `*.local` are local; everything else is production.
    #[must_use]
    pub fn from_host(host: &str) -> Self {
        if host == "localhost" || host.starts_with("127.0.0.1") || host.ends_with(".local") {
            Self::Local
        } else {
            Self::Production
        }
    }
}

/// The two fixed base URLs the resolver chooses between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub local_url: String,
    pub production_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            local_url: LOCAL_API_URL.to_owned(),
            production_url: PRODUCTION_API_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by `HOPBUNNY_LOCAL_API_URL` and
    /// `HOPBUNNY_PRODUCTION_API_URL` when set to a non-empty value.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            local_url: env_override("HOPBUNNY_LOCAL_API_URL").unwrap_or(defaults.local_url),
            production_url: env_override("HOPBUNNY_PRODUCTION_API_URL")
                .unwrap_or(defaults.production_url),
        }
    }

    /// Base URL for `host`.
    #[must_use]
    pub fn resolve(&self, host: &str) -> &str {
        let environment = Environment::from_host(host);
        let url = match environment {
            Environment::Local => self.local_url.as_str(),
            Environment::Production => self.production_url.as_str(),
        };
        debug!(host, ?environment, api_url = url, "resolved API endpoint");
        url
    }
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
