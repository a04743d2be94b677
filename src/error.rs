//! Error types for rs-partials.
//!
//! Only [`Error::ParseError`] aborts a split. Render failures on a single
//! candidate are recovered inside the pipeline and reported as warnings;
//! finding nothing to extract is a normal, successful outcome.

/// Error type for split operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed or produced no usable document.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// A node or subtree could not be serialized.
    #[error("HTML rendering failed: {0}")]
    RenderError(String),

    /// A partial name is not a filesystem-safe slug.
    #[error("Invalid partial name: {0:?}")]
    InvalidPartialName(String),

    /// Writing views to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for split operations.
pub type Result<T> = std::result::Result<T, Error>;
