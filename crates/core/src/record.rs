//! Article records produced by the content pipeline.
//!
//! `content` is stored as a JSON string literal so it can be embedded verbatim
//! into a JSON document. `to_json_line` is the single serialization path for a
//! whole record: `timestamp` and `title` go through serde and `content` is
//! spliced in as a raw value, so every field ends up escaped exactly once.

use serde::Serialize;
use serde_json::value::RawValue;

use crate::Error;

/// A validated article extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Publication date as `YYYYMMDD`, or empty when the page carries none.
    pub timestamp: String,
    /// Headline text, possibly empty.
    pub title: String,
    /// Normalized body text encoded as a JSON string literal, quotes included.
    pub content: String,
}

#[derive(Serialize)]
struct RecordLine<'a> {
    timestamp: &'a str,
    title: &'a str,
    content: &'a RawValue,
}

impl ArticleRecord {
    /// Build a record from plain body text, escaping it for JSON embedding.
    pub fn new(timestamp: impl Into<String>, title: impl Into<String>, text: &str) -> Result<Self, Error> {
        Ok(Self { timestamp: timestamp.into(), title: title.into(), content: escape_json_string(text)? })
    }

    /// The body text with the JSON escaping undone.
    pub fn decoded_content(&self) -> Result<String, Error> {
        Ok(serde_json::from_str(&self.content)?)
    }

    /// Serialize the record as a single-line JSON object.
    pub fn to_json_line(&self) -> Result<String, Error> {
        let content: &RawValue = serde_json::from_str(&self.content)?;
        let line = RecordLine { timestamp: &self.timestamp, title: &self.title, content };
        Ok(serde_json::to_string(&line)?)
    }
}

/// Encode `text` as a JSON string literal, surrounding quotes included.
pub fn escape_json_string(text: &str) -> Result<String, Error> {
    Ok(serde_json::to_string(text)?)
}
