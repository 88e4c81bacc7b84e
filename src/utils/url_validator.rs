//! Target URL validation.
//!
//! Only absolute `http`/`https` URLs with a host are accepted. The input is
//! returned verbatim on success; no normalization is applied, so a decoded
//! link yields exactly the string that was encoded.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed, got scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain surrounding whitespace or control characters")]
    StrayWhitespace,
}

/// Validates a user-supplied target URL.
///
/// # Rules
///
/// 1. The string must begin with `http://` or `https://` (scheme is matched
///    case-insensitively)
/// 2. It must not have leading or trailing whitespace, nor tabs or newlines
///    anywhere (the parser drops those silently, but the raw input is stored)
/// 3. It must parse as an absolute URL
/// 4. It must carry a non-empty host
///
/// # Errors
///
/// Returns [`UrlValidationError::UnsupportedScheme`] for any other scheme,
/// [`UrlValidationError::StrayWhitespace`] for padded input,
/// [`UrlValidationError::InvalidFormat`] for unparsable input and
/// [`UrlValidationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/path").is_ok());
/// assert!(validate_target_url("ftp://example.com/").is_err());
/// assert!(validate_target_url("not a url").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<&str, UrlValidationError> {
    if !has_http_prefix(input) {
        let scheme = input
            .split_once(':')
            .map(|(scheme, _)| scheme.to_string())
            .unwrap_or_default();
        return Err(UrlValidationError::UnsupportedScheme(scheme));
    }

    if input != input.trim() || input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::StrayWhitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(input)
}

fn has_http_prefix(input: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
