//! # rs-partials
//!
//! Split a single exported HTML page into an EJS entry template plus a set of
//! reusable partials.
//!
//! Page sections (`<nav>`, `<header>`, hero and pricing blocks, …) and the
//! components nested inside them (buttons, cards, repeated list items) are
//! cut out of the document, named after their tag and class, and replaced by
//! `<%- include('partials/<name>') %>` directives. Inlining every include
//! again gives back the original markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_partials::split;
//!
//! let html = r#"<html><body>
//!     <section class="hero"><h1>Welcome</h1></section>
//!     <section class="pricing"><p>$9/month</p></section>
//! </body></html>"#;
//!
//! let result = split(html)?;
//! assert!(result.main_html.contains("<%- include('partials/section-hero') %>"));
//! assert!(result.partials.contains_key("section-pricing"));
//! # Ok::<(), rs_partials::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Boundary detection**: Semantic section tags and section-like class names
//! - **Nested components**: Buttons, keyword-labelled blocks and repeated patterns
//! - **Deduplication**: Byte-identical subtrees share one partial
//! - **Configurable**: Every depth limit and threshold lives in [`Options`]

mod error;
mod options;
mod patterns;
mod result;

/// Arena tree built from the `dom_query` parser.
pub mod dom;

/// HTML serialization of arena nodes.
pub mod render;

/// Tab-indented pretty-printer.
pub mod format;

/// Selector rules: content root, boundaries, nested components.
pub mod selector;

/// Partial extraction pipeline (naming, rewriting, orchestration).
pub mod extractor;

/// Placeholder markers and include directives.
pub mod placeholder;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Component suggestion report.
pub mod analyze;

/// Writing split results as `.ejs` files.
pub mod views;

// Public API - re-exports
pub use analyze::{suggest_components, ComponentSuggestion};
pub use error::{Error, Result};
pub use format::format_html;
pub use options::Options;
pub use result::SplitResult;
pub use views::{write_views, write_views_with_options};

/// Splits an HTML document into a main template and partials using default
/// options.
///
/// # Example
///
/// ```rust
/// use rs_partials::split;
///
/// let result = split("<html><body><p>Nothing to split</p></body></html>")?;
/// assert!(result.partials.is_empty());
/// # Ok::<(), rs_partials::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn split(html: &str) -> Result<SplitResult> {
    split_with_options(html, &Options::default())
}

/// Splits an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_partials::{split_with_options, Options};
///
/// let options = Options {
///     format_output: false,
///     partials_dir: "components".to_string(),
///     ..Options::default()
/// };
/// let result = split_with_options("<header><h1>Site</h1></header><footer><p>bye</p></footer>", &options)?;
/// assert!(result.main_html.contains("include('components/header')"));
/// # Ok::<(), rs_partials::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn split_with_options(html: &str, options: &Options) -> Result<SplitResult> {
    extractor::pipeline::split_document(html, options)
}

/// Splits HTML bytes with automatic encoding detection.
///
/// The charset is taken from a byte-order mark or a `<meta>` declaration in
/// the first 1024 bytes, defaulting to UTF-8. Undecodable bytes become
/// U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_partials::split_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><header><p>Caf\xE9</p></header><footer><p>x</p></footer>";
/// let result = split_bytes(html)?;
/// assert!(result.partials["header"].contains("Café"));
/// # Ok::<(), rs_partials::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn split_bytes(html: &[u8]) -> Result<SplitResult> {
    split_bytes_with_options(html, &Options::default())
}

/// Splits HTML bytes with custom options and automatic encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn split_bytes_with_options(html: &[u8], options: &Options) -> Result<SplitResult> {
    let html = encoding::transcode_to_utf8(html);
    split_with_options(&html, options)
}
