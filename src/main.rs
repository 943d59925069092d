//! postboard server entry point.
//!
//! Starts the Axum HTTP server with the post REST endpoints.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use postboard::api;
use postboard::app_state::AppState;
use postboard::config::BoardConfig;
use postboard::persistence::{self, PgPostRepository};
use postboard::repository::{MemoryPostRepository, PostBackend};
use postboard::service::PostService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = BoardConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(addr = %config.listen_addr, "starting postboard");

    // Build repository layer
    let backend = if config.persistence_enabled {
        let pool = persistence::connect(&config).await?;
        PostBackend::from(PgPostRepository::new(pool))
    } else {
        PostBackend::from(MemoryPostRepository::new())
    };
    tracing::info!(storage = backend.name(), "storage ready");

    // Build service layer
    let post_service = PostService::new(backend, config.limits, config.list_order);
    if config.seed_post_count > 0 {
        post_service.seed(config.seed_post_count).await?;
    }

    // Build router
    let app = api::build_app(
        AppState::new(post_service),
        Duration::from_secs(config.request_timeout_secs),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
