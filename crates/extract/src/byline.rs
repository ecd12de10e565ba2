//! Reporter byline removal.
//!
//! Korean wire copy opens with a dateline tag and the reporter's name, e.g.
//! `[서울=뉴시스] 홍길동 기자 = 본문` or `(서울=연합뉴스) 홍길동 특파원 hong@yna.co.kr 본문`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BYLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*",
        r"(?:[\[(【][^\])】]*=[^\])】]*[\])】]\s*)*",
        r"(?:[가-힣]{2,4}\s*(?:선임|수석|인턴|객원)?\s*(?:기자|특파원)",
        // a credit ends in `=`, an e-mail address, or the end of the line
        r"(?:\s*=\s*(?:[\w.+-]+@[\w-]+(?:\.[\w-]+)+\s*)?|\s+[\w.+-]+@[\w-]+(?:\.[\w-]+)+\s*|\s*$))?",
    ))
    .unwrap()
});

/// Removes a leading byline fragment from a line.
pub trait BylineStripper {
    fn strip<'a>(&self, line: &'a str) -> Cow<'a, str>;
}

/// Strips dateline tags and `<name> 기자 =` style reporter credits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReporterNameStripper;

impl BylineStripper for ReporterNameStripper {
    fn strip<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match BYLINE_RE.find(line) {
            Some(m) if m.end() > 0 => Cow::Borrowed(line[m.end()..].trim_start()),
            _ => Cow::Borrowed(line),
        }
    }
}

pub fn remove_reporter_name(line: &str) -> Cow<'_, str> {
    ReporterNameStripper.strip(line)
}
