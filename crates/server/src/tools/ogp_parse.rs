//! ogp_parse tool implementation.
//!
//! Fetches a URL and returns its title, description, favicon, Open Graph and
//! Twitter Card metadata as JSON.

use ogp_client::OgpParser;
use ogp_core::{Error, MetaData, ParserOptions};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for ogp_parse tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OgpParseParams {
    /// The absolute http(s) URL to fetch.
    pub url: String,

    /// Origins (scheme://host[:port]) the URL must belong to.
    /// Falls back to the server's configured allow list when omitted.
    #[serde(default)]
    pub allow_origins: Option<Vec<String>>,
}

/// Resolve the per-call options and run the parser.
pub async fn parse_meta(parser: &OgpParser, defaults: &ParserOptions, params: OgpParseParams) -> Result<MetaData, Error> {
    let options = match params.allow_origins {
        Some(origins) => ParserOptions::default().with_allow_origins(origins),
        None => defaults.clone(),
    };

    parser.parse(&params.url, &options).await
}

/// Implementation of the ogp_parse tool.
pub async fn parse_impl(
    parser: &OgpParser, defaults: &ParserOptions, params: OgpParseParams,
) -> Result<CallToolResult, McpError> {
    let url = params.url.clone();
    let meta = parse_meta(parser, defaults, params).await.inspect_err(|e| {
        tracing::debug!(%url, code = e.code(), "ogp_parse failed");
    })?;

    let text = serde_json::to_string_pretty(&meta)
        .map_err(|e| McpError::internal_error(format!("failed to serialize metadata: {e}"), None))?;

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
