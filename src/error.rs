//! Error types for mangafox-source.
//!
//! Only structural failures surface here. Missing optional fields, bad dates
//! and gated images degrade to `None`, `0` or a placeholder instead.

/// Error type for extraction and request-building operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mandatory element was not found on a single-subject page.
    #[error("required element not found: {selector}")]
    MissingElement {
        /// The CSS selector that matched nothing.
        selector: &'static str,
    },

    /// A base URL, document location or link could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Page numbers start at 1.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn missing(selector: &'static str) -> Self {
        Self::MissingElement { selector }
    }
}
