//! Unified error types for newsparse.
//!
//! Every content failure is terminal for the document being processed.
//! Retrying belongs to whatever fetched the page, not to the parser.

/// Unified error types for article extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The article body container is not present in the document.
    #[error("MISSING_CONTENT: there is no news article content container")]
    MissingContentContainer,

    /// The normalized body text contains too few Korean characters.
    #[error("INSUFFICIENT_SCRIPT: too few Korean characters in the content ({ratio:.3} < {threshold})")]
    InsufficientTargetScript { ratio: f64, threshold: f64 },

    /// Sentence filtering and byline removal left nothing behind.
    #[error("EMPTY_CONTENT: there is no news article content")]
    EmptyContentAfterFiltering,

    /// A selection rule could not be compiled into a CSS selector.
    #[error("INVALID_SELECTOR: {0}")]
    InvalidSelector(String),

    /// Record serialization failed.
    #[error("SERIALIZE_FAILED: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error rejects the document's content, as opposed to a fault in the parser itself.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::MissingContentContainer | Error::InsufficientTargetScript { .. } | Error::EmptyContentAfterFiltering
        )
    }
}
