//! # client
//!
//! Leptos + WASM frontend for Hop Bunny: landing page, login, registration,
//! player dashboard, and the paginated player list.
//!
//! The request lifecycle itself lives in the `session` crate. This crate binds
//! it to the browser: `gloo-net` for HTTP, `localStorage` for the session, and
//! `location.href` for redirects.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
