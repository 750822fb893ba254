//! API client construction for the browser.
//!
//! ERROR HANDLING
//! ==============
//! A bad endpoint surfaces as a `RequestError` so pages render it through
//! the same feedback line as any other request failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{ApiClient, ApiConfig, RequestError};

use super::transport::GlooTransport;

/// Host the page was served from; `localhost` outside the browser.
pub fn current_host() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "localhost".to_owned()
    }
}

/// API client for the endpoint matching the current host.
///
/// # Errors
///
/// Returns [`RequestError::InvalidEndpoint`] if the resolved base URL does
/// not parse.
pub fn api_client() -> Result<ApiClient<GlooTransport>, RequestError> {
    client_for_host(&ApiConfig::default(), &current_host())
}

fn client_for_host(config: &ApiConfig, host: &str) -> Result<ApiClient<GlooTransport>, RequestError> {
    Ok(ApiClient::new(config.resolve(host), GlooTransport)?)
}
