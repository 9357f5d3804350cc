//! MCP tool implementations.
//!
//! This module contains all tools exposed by the ogp-parser server.

pub mod ogp_parse;
