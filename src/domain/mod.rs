//! Domain layer containing the data model and the store contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
