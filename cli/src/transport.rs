//! `reqwest` implementation of the request transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use session::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self
            .client
            .request(method, request.url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %request.url, "response received");
        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}
