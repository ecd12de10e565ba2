//! Article extraction for newsparse.
//!
//! This crate turns raw Naver News HTML into validated article records and
//! harvests article URLs from section listing pages. Fetching, persistence and
//! batching are left to the caller.

pub mod byline;
pub mod document;
pub mod extract;
pub mod script;

pub use byline::{BylineStripper, ReporterNameStripper, remove_reporter_name};
pub use document::{Document, SelectionRule};
pub use extract::{
    ArticleParser, ContentPipeline, extract_article_title, extract_article_urls, extract_published_at,
    extract_timestamp, normalize_content, parse_article_content,
};
pub use script::{HangulRatio, ScriptRatio, korean_character_ratio};

pub use newsparse_core::{ArticleRecord, ConfigError, Error, ParserConfig};
