//! Core types and shared functionality for ogp-parser.
//!
//! This crate provides:
//! - The `MetaData` record produced by the parser
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod meta;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use meta::{MetaData, OpenGraph, ParserOptions, Twitter};
