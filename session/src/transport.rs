//! HTTP seam between the request lifecycle and a concrete client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build sends requests with `gloo-net`, the CLI with `reqwest`.
//! Both hand back the status line and the raw body text; classification of
//! that response lives in [`crate::api`], not in the transports.

use async_trait::async_trait;
use url::Url;

/// HTTP methods used by the game API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully-built API request. Always sent with `Content-Type: application/json`.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// Bearer credential for the `Authorization` header.
    pub bearer: Option<String>,
    /// JSON body for `POST` requests.
    pub body: Option<serde_json::Value>,
}

impl std::fmt::Debug for ApiRequest {
    // Bodies carry passwords and `bearer` carries the token; keep both out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("authenticated", &self.bearer.is_some())
            .finish_non_exhaustive()
    }
}

/// What came back over the wire. The body is left unparsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    /// `true` for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Sends one request and returns the raw response.
///
/// Futures are not required to be `Send`: the browser runtime is
/// single-threaded and the CLI drives one request at a time.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
