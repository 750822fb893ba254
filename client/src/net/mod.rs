//! Networking modules for the game API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` carries requests over `gloo-net`; `api` resolves the endpoint
//! for the current host and builds the shared `session::ApiClient`.

pub mod api;
pub mod transport;
