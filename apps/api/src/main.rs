mod catalog;
mod config;
mod editor;
mod errors;
mod export;
mod ids;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{KeyValueStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvbuilder API v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config).await?;
    let state = AppState::new(store, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Redis when `REDIS_URL` is set, otherwise an in-process store.
async fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match &config.redis_url {
        Some(url) => {
            let store = RedisStore::connect(url, &config.store_key_prefix).await?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("REDIS_URL not set; resume data will be kept in memory only");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
