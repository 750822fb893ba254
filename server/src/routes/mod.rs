//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This host serves the Leptos app (SSR + hydration assets) and the static
//! game build. The game API itself lives on a separate backend that the
//! browser calls directly.


use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on Leptos: health check and the game build.
fn static_routes(game_dir: &Path) -> Router {
    let game_service = ServeDir::new(game_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/game", game_service)
}

/// Leptos SSR routes, `/pkg` assets, and the static routes.
pub fn app(leptos_options: LeptosOptions, game_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    static_routes(game_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
