//! Application layer services implementing business logic.
//!
//! Services consume the store trait and expose a small API to HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
