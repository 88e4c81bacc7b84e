//! Redis-backed store implementation.

use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Config, Connection, Pool, PoolConfig, Runtime};
use std::time::Duration;
use tracing::{debug, error, info, trace};

/// Pool and key settings for [`RedisStore`].
#[derive(Debug, Clone)]
pub struct RedisStoreOptions {
    /// Maximum number of pooled connections.
    pub pool_size: usize,
    /// How long a request waits for a free connection (and for a new one to be
    /// established) before failing.
    pub pool_timeout: Duration,
    /// Prefix prepended to every key.
    pub key_prefix: String,
}

impl Default for RedisStoreOptions {
    fn default() -> Self {
        Self {
            pool_size: 16,
            pool_timeout: Duration::from_secs(5),
            key_prefix: "shorturl:".to_string(),
        }
    }
}

/// Redis store for short link mappings.
///
/// Every operation acquires a connection from the pool, issues one command and
/// drops the connection, which returns it to the pool on every exit path
/// including errors.
pub struct RedisStore {
    pool: Pool,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StoreError {
    StoreError::Operation(format!("{operation}: {err}"))
}

impl RedisStore {
    /// Builds the pool and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the pool
    /// cannot be built, or the PING fails.
    pub async fn connect(redis_url: &str, options: RedisStoreOptions) -> StoreResult<Self> {
        info!("Creating Redis pool (max {} connections)", options.pool_size);

        let mut pool_config = PoolConfig::new(options.pool_size);
        pool_config.timeouts.wait = Some(options.pool_timeout);
        pool_config.timeouts.create = Some(options.pool_timeout);
        pool_config.timeouts.recycle = Some(options.pool_timeout);

        let mut config = Config::from_url(redis_url);
        config.pool = Some(pool_config);

        let pool = config.create_pool(Some(Runtime::Tokio1)).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis pool: {e}"))
        })?;

        let store = Self {
            pool,
            key_prefix: options.key_prefix,
        };

        store
            .ping()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {e}")))?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }

    async fn acquire(&self) -> StoreResult<Connection> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection from pool: {}", e);
            StoreError::Pool(e.to_string())
        })
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn get(&self, id: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(id);
        let mut conn = self.acquire().await?;

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(target)) => {
                trace!("Store HIT: {}", id);
                Ok(Some(target))
            }
            Ok(None) => {
                trace!("Store MISS: {}", id);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", id, e);
                Err(map_redis_error("failed to read key", e))
            }
        }
    }

    async fn set_if_absent(&self, id: &str, target: &str) -> StoreResult<bool> {
        let key = self.build_key(id);
        let mut conn = self.acquire().await?;

        match conn.set_nx::<_, _, bool>(&key, target).await {
            Ok(created) => {
                debug!("Store SETNX: {} (created: {})", id, created);
                Ok(created)
            }
            Err(e) => {
                error!("Redis SETNX error for {}: {}", id, e);
                Err(map_redis_error("failed to write key", e))
            }
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.acquire().await?;

        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_redis_error("PING failed", e))
    }
}
