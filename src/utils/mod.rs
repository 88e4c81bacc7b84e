//! Utility functions for identifier generation, URL validation, and request handling.
//!
//! - [`id_generator`] - Random short identifier generation
//! - [`url_validator`] - HTTP/HTTPS target URL validation
//! - [`base_url`] - Base URL reconstruction from HTTP headers

pub mod base_url;
pub mod id_generator;
pub mod url_validator;
