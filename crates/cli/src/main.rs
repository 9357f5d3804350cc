//! Command line front-end: fetch a URL and print its metadata as JSON.
//!
//! Settings come from `AppConfig::load()` and are overridden by flags.
//! Only the JSON result goes to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use ogp_client::{FetchConfig, OgpParser};
use ogp_core::{AppConfig, ParserOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract title, description, favicon, Open Graph and Twitter Card metadata from a URL")]
struct Args {
    #[arg(help = "Absolute http(s) URL to fetch.")]
    url: String,

    #[arg(
        short,
        long = "allow-origin",
        value_name = "ORIGIN",
        help = "Only fetch if the URL's origin (scheme://host[:port]) is one of these. Repeatable."
    )]
    allow_origins: Vec<String>,

    #[arg(long, value_name = "MS", help = "Request timeout in milliseconds.")]
    timeout_ms: Option<u64>,

    #[arg(long, value_name = "UA", help = "User-Agent header to send.")]
    user_agent: Option<String>,

    #[arg(long, help = "Print JSON on a single line.")]
    compact: bool,
}

impl Args {
    /// Apply flag overrides on top of the loaded configuration.
    fn merge_into(&self, mut config: AppConfig) -> Result<AppConfig> {
        if !self.allow_origins.is_empty() {
            config.allow_origins = self.allow_origins.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.merge_into(AppConfig::load()?)?;
    let options: ParserOptions = config.parser_options();

    tracing::debug!(url = %args.url, allow_origins = config.allow_origins.len(), "parsing");

    let parser = OgpParser::with_config(FetchConfig::from(&config))?;
    let meta = parser
        .parse(&args.url, &options)
        .await
        .with_context(|| format!("failed to parse {}", args.url))?;

    let json = if args.compact { serde_json::to_string(&meta)? } else { serde_json::to_string_pretty(&meta)? };
    println!("{json}");

    Ok(())
}
