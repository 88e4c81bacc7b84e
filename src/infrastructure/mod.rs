//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`store`] - Key-value store backends (Redis and in-memory)

pub mod store;
