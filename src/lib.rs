//! # shorturl
//!
//! A small URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity and the store trait
//! - **Application Layer** ([`application`]) - Encode and resolve logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /encode` - `{ "url": ... }` → `{ "url", "short" }`
//! - `GET /decode/{id}` - `{ "url", "short" }` or 404
//! - `GET /{id}` - 307 redirect or 404
//! - `GET /health` - `{ "message": "OK" }`
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//!
//! # or without Redis
//! STORE_BACKEND=memory cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
    pub use crate::utils::id_generator::IdGenerator;
}
