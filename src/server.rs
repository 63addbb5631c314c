//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::application::services::{RateLimitService, ShortenService};
use crate::config::Config;
use crate::infrastructure::kv::{KeyValueStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis connection (with retry/backoff on startup)
/// - Shorten and rate-limit services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store connection fails after retries
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let retry_strategy = ExponentialBackoff::from_millis(500).map(jitter).take(5);

    let store = Retry::spawn(retry_strategy, || RedisStore::connect(&config.redis_url)).await?;
    let store: Arc<dyn KeyValueStore> = Arc::new(store);

    let shortener = Arc::new(ShortenService::new(
        store.clone(),
        config.domain.clone(),
        config.default_expiry_hours,
    ));
    let rate_limiter = Arc::new(RateLimitService::new(
        store.clone(),
        config.api_quota,
        Duration::from_secs(config.rate_limit_window_secs),
    ));

    let state = AppState {
        shortener,
        rate_limiter,
        store,
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives a shutdown signal.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
