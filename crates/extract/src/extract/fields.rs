//! Headline and publication date lookup.
//!
//! Both are best-effort metadata: a missing element, attribute or unparsable
//! value degrades to an empty string instead of failing the article.

use chrono::{NaiveDate, NaiveDateTime};

use crate::document::{Document, SelectionRule, element_text};

pub(crate) const TITLE_RULE: SelectionRule =
    SelectionRule::tag("h2").with_id("title_area").with_classes(&["media_end_head_headline"]);

pub(crate) const TIMESTAMP_RULE: SelectionRule =
    SelectionRule::tag("span").with_classes(&["media_end_head_info_datestamp_time", "_ARTICLE_DATE_TIME"]);

const TIMESTAMP_ATTR: &str = "data-date-time";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Headline text of an article page, or an empty string.
pub fn extract_article_title(html: &str) -> String {
    title_from(&Document::parse(html))
}

/// Publication date of an article page as `YYYYMMDD`, or an empty string.
pub fn extract_timestamp(html: &str) -> String {
    timestamp_from(&Document::parse(html))
}

/// Full publication datetime of an article page.
pub fn extract_published_at(html: &str) -> Option<NaiveDateTime> {
    let document = Document::parse(html);
    let raw = raw_timestamp(&document)?;
    match NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT) {
        Ok(published_at) => Some(published_at),
        Err(e) => {
            tracing::debug!(value = %raw, error = %e, "unparsable article datetime");
            None
        }
    }
}

pub(crate) fn title_from(document: &Document) -> String {
    match document.first(&TITLE_RULE) {
        Ok(Some(element)) => element_text(element),
        Ok(None) => String::new(),
        Err(e) => {
            tracing::warn!(error = %e, "title selector failed");
            String::new()
        }
    }
}

pub(crate) fn timestamp_from(document: &Document) -> String {
    let Some(raw) = raw_timestamp(document) else {
        return String::new();
    };

    // "2024-01-15 20:28:01" -> "20240115"
    let date = raw.split_whitespace().next().unwrap_or_default();
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) => date.format("%Y%m%d").to_string(),
        Err(e) => {
            tracing::debug!(value = %raw, error = %e, "unparsable article date");
            String::new()
        }
    }
}

fn raw_timestamp(document: &Document) -> Option<String> {
    match document.first(&TIMESTAMP_RULE) {
        Ok(element) => element.and_then(|el| el.value().attr(TIMESTAMP_ATTR)).map(str::to_string),
        Err(e) => {
            tracing::warn!(error = %e, "timestamp selector failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_HEAD: &str = r#"
        <html>
            <body>
                <div class="media_end_head_title">
                    <h2 id="title_area" class="media_end_head_headline">
                        <span>서울시, 새 교통 정책 발표</span>
                    </h2>
                </div>
                <div class="media_end_head_info_datestamp_bunch">
                    <span class="media_end_head_info_datestamp_time _ARTICLE_DATE_TIME"
                          data-date-time="2024-01-15 20:28:01">2024.01.15. 오후 8:28</span>
                </div>
            </body>
        </html>
    "#;

    #[test]
    fn test_rules_compile() {
        assert!(TITLE_RULE.selector().is_ok());
        assert!(TIMESTAMP_RULE.selector().is_ok());
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_article_title(ARTICLE_HEAD), "서울시, 새 교통 정책 발표");
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(extract_article_title("<html><body><h2>Other</h2></body></html>"), "");
    }

    #[test]
    fn test_extract_title_requires_class() {
        let html = r#"<h2 id="title_area">No class</h2>"#;
        assert_eq!(extract_article_title(html), "");
    }

    #[test]
    fn test_extract_timestamp() {
        assert_eq!(extract_timestamp(ARTICLE_HEAD), "20240115");
    }

    #[test]
    fn test_extract_timestamp_missing_element() {
        assert_eq!(extract_timestamp("<html><body></body></html>"), "");
    }

    #[test]
    fn test_extract_timestamp_missing_attribute() {
        let html = r#"<span class="media_end_head_info_datestamp_time _ARTICLE_DATE_TIME">2024.01.15.</span>"#;
        assert_eq!(extract_timestamp(html), "");
    }

    #[test]
    fn test_extract_timestamp_requires_both_classes() {
        let html = r#"<span class="media_end_head_info_datestamp_time" data-date-time="2024-01-15 20:28:01"></span>"#;
        assert_eq!(extract_timestamp(html), "");
    }

    #[test]
    fn test_extract_timestamp_malformed() {
        let html = r#"<span class="media_end_head_info_datestamp_time _ARTICLE_DATE_TIME" data-date-time="yesterday"></span>"#;
        assert_eq!(extract_timestamp(html), "");
    }

    #[test]
    fn test_extract_timestamp_date_only() {
        let html = r#"<span class="media_end_head_info_datestamp_time _ARTICLE_DATE_TIME" data-date-time="2023-12-01"></span>"#;
        assert_eq!(extract_timestamp(html), "20231201");
    }

    #[test]
    fn test_extract_published_at() {
        let published_at = extract_published_at(ARTICLE_HEAD).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(20, 28, 1).unwrap();
        assert_eq!(published_at, expected);
    }

    #[test]
    fn test_extract_published_at_missing() {
        assert!(extract_published_at("<html></html>").is_none());
    }
}
