//! Key-value store backends for short link mappings.
//!
//! Provides two implementations of [`crate::domain::repositories::LinkStore`]:
//! - [`RedisStore`] - Production Redis backend behind a connection pool
//! - [`MemoryStore`] - In-process map for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::{RedisStore, RedisStoreOptions};
