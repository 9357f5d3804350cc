//! HTTP fetch stage.
//!
//! ### Request
//! - `GET <url>` with `user-agent`, `accept: text/html`, `accept-charset: utf-8`
//! - Redirects followed up to a limit (default: 5)
//! - No retry; one request per call
//!
//! ### Body
//! - Decoded to text using the `Content-Type` charset, UTF-8 otherwise
//! - Max body bytes: 5MB (configurable)
//! - Not read for non-2xx responses
//!
//! ### Status
//! Classified by [`check_status`], shared by every [`Fetcher`] implementation:
//! 2xx passes, 404 is `NotFound`, everything else is `Network`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use url::Url;

use ogp_core::{AppConfig, Error};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "deno_ogp_parser")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Request timeout (default: 20s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "deno_ogp_parser".to_string(),
            max_bytes: 5 * 1024 * 1024,
            timeout: Duration::from_millis(20000),
            max_redirects: 5,
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            max_redirects: config.max_redirects,
        }
    }
}

/// Response from a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header
    pub content_type: Option<String>,
    /// Decoded response body
    pub body: String,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

impl FetchResponse {
    /// A response with the given status and body, as served for `url` without redirects.
    pub fn new(url: Url, status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            final_url: url.clone(),
            url,
            status,
            content_type: Some("text/html".to_string()),
            body: body.into(),
            fetch_ms: 0,
        }
    }
}

/// HTTP capability used by the parser.
///
/// Implementations return the response whatever its status; the caller
/// classifies it with [`check_status`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue one GET request for `url` and read the whole body as text.
    ///
    /// The body of a non-2xx response may be left empty.
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error>;
}

/// Map a response status to the pipeline's error kinds.
pub fn check_status(status: StatusCode, url: &Url) -> Result<(), Error> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(Error::NotFound(url.to_string()))
    } else {
        Err(Error::Network(format!("status {} from {}", status.as_u16(), url)))
    }
}

/// reqwest-backed fetcher.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    fn too_large(&self, len: usize) -> Error {
        Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes))
    }
}

fn network_error(context: &str, e: &reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Network(format!("{context}: timed out: {e}"))
    } else {
        Error::Network(format!("{context}: {e}"))
    }
}

#[async_trait]
impl Fetcher for FetchClient {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "text/html")
            .header(header::ACCEPT_CHARSET, "utf-8")
            .send()
            .await
            .map_err(|e| network_error("network error", &e))?;

        let status = response.status();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        // Error bodies are never parsed, so they are neither read nor size-checked.
        if !status.is_success() {
            tracing::debug!("fetched {} -> {} ({}), body skipped", url, final_url, status.as_u16());
            let fetch_ms = start.elapsed().as_millis() as u64;
            return Ok(FetchResponse { url: url.clone(), final_url, status, content_type, body: String::new(), fetch_ms });
        }

        if let Some(len) = response.content_length()
            && len > self.config.max_bytes as u64
        {
            return Err(self.too_large(len as usize));
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error("failed to read response", &e))?;

        if body.len() > self.config.max_bytes {
            return Err(self.too_large(body.len()));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "fetched {} -> {} ({}) in {}ms ({} bytes)",
            url,
            final_url,
            status.as_u16(),
            fetch_ms,
            body.len()
        );

        Ok(FetchResponse { url: url.clone(), final_url, status, content_type, body, fetch_ms })
    }
}
