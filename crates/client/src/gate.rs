//! URL gate: syntax check and origin allow-list.
//!
//! Runs before any network I/O. The input is parsed strictly as an absolute
//! URL (no scheme defaulting) and its origin is compared by exact string
//! equality against the caller's allow-list, if one was supplied.

use ogp_core::{Error, ParserOptions};
use url::Url;

/// Error type for URL gate failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("origin {0} is not in the allow list")]
    OriginNotAllowed(String),
}

impl From<UrlError> for Error {
    fn from(err: UrlError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

/// Serialized origin of a URL: `scheme://host[:port]`, default port elided.
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Parse `input` as an absolute http(s) URL.
pub fn parse_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(format!("{trimmed}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }
}

/// Validate a URL against the options' allow-list.
///
/// Returns the parsed URL to fetch.
pub fn check_url(input: &str, options: &ParserOptions) -> Result<Url, UrlError> {
    let url = parse_url(input)?;

    if let Some(allowed) = &options.allow_origins {
        let origin = origin_of(&url);
        if !allowed.iter().any(|a| *a == origin) {
            tracing::debug!(%origin, allowed = allowed.len(), "origin rejected by allow list");
            return Err(UrlError::OriginNotAllowed(origin));
        }
    }

    Ok(url)
}
