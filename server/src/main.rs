#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(leptos_options.site_addr)?;

    let app = routes::app(leptos_options, &config.game_dir);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(addr = %config.addr, game_dir = %config.game_dir.display(), "hopbunny listening");
    axum::serve(listener, app).await?;
    Ok(())
}
