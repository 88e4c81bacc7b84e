//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state assembly, and Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::LinkStore;
use crate::infrastructure::store::{MemoryStore, RedisStore, RedisStoreOptions};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects the store selected by `config`.
///
/// # Errors
///
/// Returns an error if Redis is selected and the pool cannot be created or
/// the initial PING fails.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    let store: Arc<dyn LinkStore> = match config.store_backend {
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("Redis backend selected but no Redis URL configured")?;

            let options = RedisStoreOptions {
                pool_size: config.redis_pool_size,
                pool_timeout: Duration::from_secs(config.redis_pool_timeout),
                key_prefix: config.redis_key_prefix.clone(),
            };

            let redis = RedisStore::connect(redis_url, options)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Store enabled (Redis)");
            Arc::new(redis)
        }
        StoreBackend::Memory => {
            tracing::warn!("Store enabled (memory); mappings are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (Redis pool or in-memory map)
/// - Identifier generator
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let generator = config.id_generator()?;
    let store = connect_store(&config).await?;

    let state = AppState::new(store, generator);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
