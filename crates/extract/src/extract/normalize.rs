//! Body text normalization.
//!
//! Turns the article container into newline-separated lines, then narrows the
//! lines down to real sentences.

use scraper::{ElementRef, Node};

use crate::byline::BylineStripper;

/// Text of the container with markup stripped and `<br>` kept as `\n`.
///
/// Only direct text children survive. Every other child element contributes
/// nothing, including any text or `<br>` nested inside it, so photo captions
/// and embedded widgets drop out while the breaks between paragraphs stay in
/// place.
pub fn strip_markup(container: ElementRef<'_>) -> String {
    let mut text = String::new();
    for child in container.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if e.name() == "br" => text.push('\n'),
            _ => {}
        }
    }
    text
}

/// Trim the whole text and every line in it.
pub fn normalize_lines(text: &str) -> String {
    text.trim().split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Keep only lines ending in a period. Empty lines are dropped.
pub fn keep_sentences(text: &str) -> String {
    text.lines().filter(|line| line.ends_with('.')).collect::<Vec<_>>().join("\n")
}

/// Run the first line through `stripper` and rejoin it with the rest.
///
/// A first line that strips down to nothing is dropped.
pub fn strip_byline<B: BylineStripper + ?Sized>(text: &str, stripper: &B) -> String {
    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or_default();
    let stripped = stripper.strip(first);
    let head = stripped.trim();

    // The stripped head stays on its own line rather than being glued onto the next one.
    std::iter::once(head).filter(|head| !head.is_empty()).chain(lines).collect::<Vec<_>>().join("\n")
}
