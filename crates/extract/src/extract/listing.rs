//! Article URL harvesting from section listing pages.
//!
//! A listing splits its entries across two adjacent `<ul>` blocks: the
//! headline list and the list right after it. Each `<dt>` in either block is
//! one entry whose first `href` is the article URL.

use scraper::ElementRef;

use crate::document::{Document, SelectionRule, all_in, first_in};

pub(crate) const HEADLINE_LIST_RULE: SelectionRule = SelectionRule::tag("ul").with_classes(&["type06_headline"]);
pub(crate) const ENTRY_RULE: SelectionRule = SelectionRule::tag("dt");
pub(crate) const ANCHOR_RULE: SelectionRule = SelectionRule::tag("a").with_attrs(&[("href", None)]);

/// Extract article URLs from a listing page, in document order.
///
/// Never fails: a page without the listing containers yields an empty list,
/// and entries without a link are skipped. Duplicates are kept.
pub fn extract_article_urls(html: &str) -> Vec<String> {
    let document = Document::parse(html);

    let headline = match document.first(&HEADLINE_LIST_RULE) {
        Ok(Some(list)) => list,
        Ok(None) => {
            tracing::debug!("listing page has no headline list");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "listing selector failed");
            return Vec::new();
        }
    };

    let mut urls = Vec::new();
    for list in std::iter::once(headline).chain(adjacent_list(headline)) {
        collect_entry_urls(list, &mut urls);
    }

    tracing::debug!(count = urls.len(), "extracted article urls");
    urls
}

/// The next sibling element, if it is also a `<ul>`.
fn adjacent_list(list: ElementRef<'_>) -> Option<ElementRef<'_>> {
    list.next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .filter(|sibling| sibling.value().name() == "ul")
}

fn collect_entry_urls(list: ElementRef<'_>, urls: &mut Vec<String>) {
    let entries = match all_in(list, &ENTRY_RULE) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "entry selector failed");
            return;
        }
    };

    for entry in entries {
        if entry.text().all(|t| t.trim().is_empty()) && entry.children().all(|c| c.value().is_text()) {
            continue;
        }

        match first_in(entry, &ANCHOR_RULE) {
            Ok(Some(anchor)) => {
                if let Some(href) = anchor.value().attr("href") {
                    urls.push(href.to_string());
                }
            }
            Ok(None) => tracing::trace!("listing entry without a link"),
            Err(e) => tracing::warn!(error = %e, "anchor selector failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        assert!(HEADLINE_LIST_RULE.selector().is_ok());
        assert!(ENTRY_RULE.selector().is_ok());
        assert!(ANCHOR_RULE.selector().is_ok());
    }

    #[test]
    fn test_extract_urls_two_containers() {
        let html = r#"
            <html>
                <body>
                    <div class="list_body newsflash_body">
                        <ul class="type06_headline">
                            <li><dl><dt><a href="https://x/1">첫 기사</a></dt></dl></li>
                        </ul>
                        <ul class="type06">
                            <li><dl><dt><a href="https://x/2">둘째 기사</a></dt></dl></li>
                        </ul>
                    </div>
                </body>
            </html>
        "#;

        assert_eq!(extract_article_urls(html), vec!["https://x/1", "https://x/2"]);
    }

    #[test]
    fn test_extract_urls_keeps_duplicates() {
        let html = r#"
            <ul class="type06_headline">
                <li>
                    <dl>
                        <dt class="photo"><a href="https://x/1"><img src="thumb.jpg"></a></dt>
                        <dt><a href="https://x/1">첫 기사</a></dt>
                    </dl>
                </li>
            </ul>
            <ul class="type06">
                <li><dl><dt><a href="https://x/2">둘째 기사</a></dt></dl></li>
            </ul>
        "#;

        assert_eq!(extract_article_urls(html), vec!["https://x/1", "https://x/1", "https://x/2"]);
    }

    #[test]
    fn test_extract_urls_skips_empty_and_linkless_entries() {
        let html = r#"
            <ul class="type06_headline">
                <li><dl><dt>   </dt><dt><span>no link</span></dt><dt><a href="https://x/1">기사</a></dt></dl></li>
            </ul>
        "#;

        assert_eq!(extract_article_urls(html), vec!["https://x/1"]);
    }

    #[test]
    fn test_extract_urls_first_href_only() {
        let html = r#"
            <ul class="type06_headline">
                <li><dl><dt><a href="https://x/1">기사</a> <a href="https://x/other">more</a></dt></dl></li>
            </ul>
        "#;

        assert_eq!(extract_article_urls(html), vec!["https://x/1"]);
    }

    #[test]
    fn test_extract_urls_ignores_lists_beyond_the_pair() {
        let html = r#"
            <ul class="type06_headline"><li><dl><dt><a href="https://x/1">a</a></dt></dl></li></ul>
            <ul class="type06"><li><dl><dt><a href="https://x/2">b</a></dt></dl></li></ul>
            <ul class="type06"><li><dl><dt><a href="https://x/3">c</a></dt></dl></li></ul>
        "#;

        assert_eq!(extract_article_urls(html), vec!["https://x/1", "https://x/2"]);
    }

    #[test]
    fn test_extract_urls_non_list_sibling() {
        let html = r#"
            <ul class="type06_headline"><li><dl><dt><a href="https://x/1">a</a></dt></dl></li></ul>
            <div class="paging"><dt><a href="https://x/page2">2</a></dt></div>
        "#;

        assert_eq!(extract_article_urls(html), vec!["https://x/1"]);
    }

    #[test]
    fn test_extract_urls_no_containers() {
        let html = r#"<html><body><dt><a href="https://x/1">a</a></dt></body></html>"#;
        assert!(extract_article_urls(html).is_empty());
    }

    #[test]
    fn test_extract_urls_malformed_input() {
        assert!(extract_article_urls("<ul class=\"type06_headline\"><dt><a href=").is_empty());
        assert!(extract_article_urls("").is_empty());
    }
}
