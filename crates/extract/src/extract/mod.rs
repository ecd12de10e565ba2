//! Article extraction from Naver News pages.
//!
//! ### Content Pipeline
//! Every step is a hard gate; the first failure rejects the whole article.
//! 1. Locate the body container (`article#dic_area`).
//! 2. Strip markup, keeping `<br>` as line breaks.
//! 3. Trim every line.
//! 4. Reject text with too few Korean characters.
//! 5. Keep only lines that end in a period.
//! 6. Optionally strip the reporter byline from the first line.
//! 7. Reject empty content.
//! 8. Escape the content as a JSON string literal.
//!
//! ### Metadata
//! Title and timestamp are read from the same untouched document and never
//! fail; see [`fields`].

pub mod fields;
pub mod listing;
pub mod normalize;

pub use fields::{extract_article_title, extract_published_at, extract_timestamp};
pub use listing::extract_article_urls;
pub use normalize::{keep_sentences, normalize_lines, strip_byline, strip_markup};

use std::cmp::Ordering;

use newsparse_core::{ArticleRecord, Error, ParserConfig};

use crate::byline::{BylineStripper, ReporterNameStripper};
use crate::document::{Document, SelectionRule};
use crate::script::{HangulRatio, ScriptRatio};

pub(crate) const BODY_RULE: SelectionRule = SelectionRule::tag("article").with_id("dic_area");

/// Stable parser trait for article pages.
///
/// This allows swapping the extraction rules without changing calling code.
pub trait ArticleParser: Send + Sync {
    /// Parse one article page into a validated record.
    fn parse(&self, html: &str) -> Result<ArticleRecord, Error>;
}

/// The article content pipeline with pluggable script and byline collaborators.
#[derive(Debug, Clone)]
pub struct ContentPipeline<R = HangulRatio, B = ReporterNameStripper> {
    config: ParserConfig,
    ratio: R,
    byline: B,
}

impl ContentPipeline {
    /// Create a pipeline with the Korean script checker and reporter stripper.
    pub fn new(config: ParserConfig) -> Self {
        Self { config, ratio: HangulRatio, byline: ReporterNameStripper }
    }
}

impl Default for ContentPipeline {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<R: ScriptRatio, B: BylineStripper> ContentPipeline<R, B> {
    pub fn with_collaborators(config: ParserConfig, ratio: R, byline: B) -> Self {
        Self { config, ratio, byline }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Run the pipeline and assemble the record.
    pub fn parse_record(&self, html: &str) -> Result<ArticleRecord, Error> {
        let document = Document::parse(html);
        let content = self.content_from(&document)?;

        let timestamp = fields::timestamp_from(&document);
        let title = fields::title_from(&document);
        if title.is_empty() || timestamp.is_empty() {
            tracing::debug!(
                has_title = !title.is_empty(),
                has_timestamp = !timestamp.is_empty(),
                "article metadata incomplete"
            );
        }

        let record = ArticleRecord::new(timestamp, title, &content)?;
        tracing::trace!(timestamp = %record.timestamp, bytes = content.len(), "parsed article");
        Ok(record)
    }

    /// Validated plain body text, before JSON escaping.
    pub fn extract_content(&self, html: &str) -> Result<String, Error> {
        self.content_from(&Document::parse(html))
    }

    fn content_from(&self, document: &Document) -> Result<String, Error> {
        let text = normalized_body(document)?;

        let ratio = self.ratio.ratio(&text);
        let threshold = self.config.min_target_script_ratio;
        // NaN on either side rejects
        if matches!(ratio.partial_cmp(&threshold), None | Some(Ordering::Less)) {
            tracing::debug!(ratio, threshold, "rejecting article: too few Korean characters");
            return Err(Error::InsufficientTargetScript { ratio, threshold });
        }

        let mut content = keep_sentences(&text);
        if !self.config.include_reporter_name {
            content = strip_byline(&content, &self.byline);
        }

        if content.is_empty() {
            tracing::debug!("rejecting article: nothing left after sentence filtering");
            return Err(Error::EmptyContentAfterFiltering);
        }

        Ok(content)
    }
}

impl<R, B> ArticleParser for ContentPipeline<R, B>
where
    R: ScriptRatio + Send + Sync,
    B: BylineStripper + Send + Sync,
{
    fn parse(&self, html: &str) -> Result<ArticleRecord, Error> {
        self.parse_record(html)
    }
}

fn normalized_body(document: &Document) -> Result<String, Error> {
    let Some(container) = document.first(&BODY_RULE)? else {
        tracing::debug!("rejecting article: no body container");
        return Err(Error::MissingContentContainer);
    };
    Ok(normalize_lines(&strip_markup(container)))
}

/// Body text with markup stripped and lines trimmed, before any validation.
pub fn normalize_content(html: &str) -> Result<String, Error> {
    normalized_body(&Document::parse(html))
}

/// Parse an article page with the default collaborators and threshold.
pub fn parse_article_content(html: &str, include_reporter_name: bool) -> Result<ArticleRecord, Error> {
    let config = ParserConfig::default().with_reporter_name(include_reporter_name);
    ContentPipeline::new(config).parse(html)
}
