//! Unified error types for ogp-parser.
//!
//! Every failure of a `parsed_meta` call surfaces as one of these kinds.
//! A page whose HTML cannot be understood is not an error: extraction
//! degrades to an all-absent `MetaData` instead.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error type for the parser pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// URL does not parse as an absolute http(s) URL, or its origin is not allowed.
    ///
    /// Always raised before any network I/O.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Remote server answered with 404.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Request-level failure: DNS, connection, TLS, timeout, or a non-2xx status other than 404.
    #[error("NETWORK_ERROR: {0}")]
    Network(String),

    /// Response body exceeds the configured byte limit.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),
}

impl Error {
    /// Stable machine-readable code, matching the display prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Network(_) => "NETWORK_ERROR",
            Error::FetchTooLarge(_) => "FETCH_TOO_LARGE",
        }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::NotFound(msg) => (-32004, msg.clone()),
            Error::FetchTooLarge(msg) => (-32007, msg.clone()),
            Error::Network(msg) => (-32008, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
