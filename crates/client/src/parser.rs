//! The `parsed_meta` pipeline: gate, fetch, extract.

use std::sync::Arc;

use ogp_core::{Error, MetaData, ParserOptions};

use crate::extract::extract_meta;
use crate::fetch::{FetchClient, FetchConfig, Fetcher, check_status};
use crate::gate::check_url;

/// Fetches pages and extracts their metadata through an injected [`Fetcher`].
///
/// Holds no per-call state; one instance can serve concurrent calls.
#[derive(Clone)]
pub struct OgpParser {
    fetcher: Arc<dyn Fetcher>,
}

impl OgpParser {
    /// Parser backed by the given fetcher.
    pub fn new(fetcher: impl Fetcher + 'static) -> Self {
        Self { fetcher: Arc::new(fetcher) }
    }

    /// Parser backed by a [`FetchClient`] built from `config`.
    pub fn with_config(config: FetchConfig) -> Result<Self, Error> {
        Ok(Self::new(FetchClient::new(config)?))
    }

    /// Validate `url`, fetch it once, and extract its metadata.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `url` is not an absolute http(s) URL or its origin
    ///   is not in `options.allow_origins`. No request is made.
    /// - `NotFound` on a 404 response.
    /// - `Network` on transport failure or any other non-2xx status.
    /// - `FetchTooLarge` when the body exceeds the fetcher's limit.
    pub async fn parse(&self, url: &str, options: &ParserOptions) -> Result<MetaData, Error> {
        let url = check_url(url, options)?;

        let response = self.fetcher.fetch(&url).await?;
        check_status(response.status, &response.final_url)?;

        let meta = extract_meta(&response.body);
        tracing::debug!(url = %response.final_url, empty = meta.is_empty(), "extracted metadata");

        Ok(meta)
    }
}

impl std::fmt::Debug for OgpParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OgpParser").finish_non_exhaustive()
    }
}

/// Extract metadata from `url` with a default [`FetchClient`].
///
/// Convenience wrapper around [`OgpParser::parse`].
pub async fn parsed_meta(url: &str, options: &ParserOptions) -> Result<MetaData, Error> {
    OgpParser::with_config(FetchConfig::default())?.parse(url, options).await
}
