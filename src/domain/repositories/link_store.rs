//! Key-value store trait for short link mappings.

use async_trait::async_trait;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store pool error: {0}")]
    Pool(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store holding `id -> target` mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Pooled Redis backend
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Reads the target stored under `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(target))` if the id exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport or pool failures.
    async fn get(&self, id: &str) -> StoreResult<Option<String>>;

    /// Atomically writes `id -> target` only if `id` is not already present.
    ///
    /// Returns `Ok(true)` when the mapping was created and `Ok(false)` when the
    /// key already existed (the stored value is left untouched).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport or pool failures.
    async fn set_if_absent(&self, id: &str, target: &str) -> StoreResult<bool>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
