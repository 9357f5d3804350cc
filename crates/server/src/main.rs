//! ogp-parser MCP server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::Result;
use ogp_client::{FetchConfig, OgpParser};
use ogp_core::AppConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    tracing::info!(
        user_agent = %config.user_agent,
        timeout_ms = config.timeout_ms,
        allow_origins = config.allow_origins.len(),
        "Starting ogp-parser server on stdio transport"
    );

    let parser = OgpParser::with_config(FetchConfig::from(&config))?;
    let handler = handler::OgpServer::new(parser, config.parser_options());
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
