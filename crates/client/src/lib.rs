//! Client code for ogp-parser.
//!
//! This crate provides the URL gate, HTTP fetch stage, metadata extraction,
//! and the `parsed_meta` pipeline tying them together.

pub mod extract;
pub mod fetch;
pub mod gate;
pub mod parser;

pub use extract::{META_RULES, MetaAttr, MetaRule, extract_meta};
pub use fetch::{FetchClient, FetchConfig, FetchResponse, Fetcher, check_status};
pub use gate::{UrlError, check_url, origin_of};
pub use parser::{OgpParser, parsed_meta};

pub use ogp_core::{Error, MetaData, OpenGraph, ParserOptions, Twitter};
pub use reqwest::StatusCode;
