//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A short identifier mapped to the URL it forwards to

pub mod short_link;

pub use short_link::ShortLink;
