//! Core types and shared functionality for newsparse.
//!
//! This crate provides:
//! - Unified error types
//! - Parser configuration with layered loading
//! - The `ArticleRecord` output type and its JSON line encoding

pub mod config;
pub mod error;
pub mod record;

pub use config::{ConfigError, ParserConfig};
pub use error::Error;
pub use record::ArticleRecord;
