//! ShortLink entity representing a stored identifier-to-URL mapping.

/// A short identifier and the URL it resolves to.
///
/// The `id` is the store key and the `target` is the stored value. A mapping is
/// created once by encode and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub target: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
        }
    }

    /// Builds the fully-qualified short URL for this link under `base_url`.
    ///
    /// `base_url` is the scheme and authority of the incoming request, e.g.
    /// `https://s.example.com`. A trailing slash is tolerated.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.id)
    }
}
