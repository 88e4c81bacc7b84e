//! DTOs for the encode and decode endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    /// The original URL (must be HTTP or HTTPS).
    pub url: String,
}

/// A short link as returned by both encode and decode.
///
/// `short` is always rebuilt from the incoming request's base URL, never read
/// from storage.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortUrlResponse {
    pub url: String,
    pub short: String,
}

impl ShortUrlResponse {
    pub fn from_link(link: ShortLink, base_url: &str) -> Self {
        let short = link.short_url(base_url);
        Self {
            url: link.target,
            short,
        }
    }
}
