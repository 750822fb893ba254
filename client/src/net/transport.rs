//! `gloo-net` implementation of the request transport.
//!
//! Client-side (hydrate): real `fetch` calls. Server-side (SSR): every send
//! fails, since the API is only called from the browser.

use async_trait::async_trait;
use session::{ApiRequest, ApiResponse, Transport, TransportError};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use session::Method;

            let url = request.url.as_str();
            let mut builder = match request.method {
                Method::Get => Request::get(url),
                Method::Post => Request::post(url),
            }
            .header("Content-Type", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| TransportError::new(e.to_string()))?;
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(ApiResponse { status, status_text, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::new("HTTP transport is only available in the browser"))
        }
    }
}
