//! Store trait definitions for the domain layer.
//!
//! The service depends on the key-value store only through [`LinkStore`].
//! Implementations live in `crate::infrastructure::store`; a mock is generated
//! via `mockall` for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, StoreError, StoreResult};

#[cfg(test)]
pub use link_store::MockLinkStore;
