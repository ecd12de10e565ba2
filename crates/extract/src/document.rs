//! Thin selection layer over `scraper`.
//!
//! Page layouts are fixed, so every lookup is described by a `SelectionRule`
//! (tag name plus id, class and attribute filters) that compiles to a CSS
//! selector on demand.

use newsparse_core::Error;
use scraper::{ElementRef, Html, Selector};

/// Tag name plus id, class membership and attribute filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRule {
    pub tag: &'static str,
    pub id: Option<&'static str>,
    pub classes: &'static [&'static str],
    /// `(name, Some(value))` requires equality, `(name, None)` only presence.
    pub attrs: &'static [(&'static str, Option<&'static str>)],
}

impl SelectionRule {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, id: None, classes: &[], attrs: &[] }
    }

    pub const fn with_id(self, id: &'static str) -> Self {
        Self { id: Some(id), ..self }
    }

    pub const fn with_classes(self, classes: &'static [&'static str]) -> Self {
        Self { classes, ..self }
    }

    pub const fn with_attrs(self, attrs: &'static [(&'static str, Option<&'static str>)]) -> Self {
        Self { attrs, ..self }
    }

    /// CSS form of the rule, e.g. `h2#title_area.media_end_head_headline`.
    pub fn css(&self) -> String {
        let mut css = self.tag.to_string();
        if let Some(id) = self.id {
            css.push('#');
            css.push_str(id);
        }
        for class in self.classes {
            css.push('.');
            css.push_str(class);
        }
        for (name, value) in self.attrs {
            match value {
                Some(value) => css.push_str(&format!("[{name}=\"{value}\"]")),
                None => css.push_str(&format!("[{name}]")),
            }
        }
        css
    }

    pub fn selector(&self) -> Result<Selector, Error> {
        let css = self.css();
        Selector::parse(&css).map_err(|e| Error::InvalidSelector(format!("{css}: {e:?}")))
    }
}

/// A parsed HTML page. Never mutated after parsing.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self { html: Html::parse_document(raw) }
    }

    /// First element matching `rule` in document order.
    pub fn first(&self, rule: &SelectionRule) -> Result<Option<ElementRef<'_>>, Error> {
        let selector = rule.selector()?;
        Ok(self.html.select(&selector).next())
    }

    /// Every element matching `rule` in document order.
    pub fn all(&self, rule: &SelectionRule) -> Result<Vec<ElementRef<'_>>, Error> {
        let selector = rule.selector()?;
        Ok(self.html.select(&selector).collect())
    }
}

/// First descendant of `scope` matching `rule`.
pub fn first_in<'a>(scope: ElementRef<'a>, rule: &SelectionRule) -> Result<Option<ElementRef<'a>>, Error> {
    let selector = rule.selector()?;
    Ok(scope.select(&selector).next())
}

/// Every descendant of `scope` matching `rule`.
pub fn all_in<'a>(scope: ElementRef<'a>, rule: &SelectionRule) -> Result<Vec<ElementRef<'a>>, Error> {
    let selector = rule.selector()?;
    Ok(scope.select(&selector).collect())
}

/// All visible text below `element`, trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
