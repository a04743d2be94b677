//! Partial extraction.
//!
//! # Module Structure
//!
//! - `naming`: Base names and slug sanitizing
//! - `state`: Per-document name allocation and content deduplication
//! - `rewrite`: Swapping extracted subtrees for placeholder comments
//! - `pipeline`: Orchestration from parsed tree to [`crate::SplitResult`]
//!
//! # Usage
//!
//! ```rust
//! use rs_partials::{dom, extractor, Options};
//!
//! let mut tree = dom::parse("<header><h1>Site</h1></header><footer><p>bye</p></footer>")?;
//! let result = extractor::split_tree(&mut tree, &Options::default())?;
//!
//! assert!(result.partials.contains_key("header"));
//! assert!(result.partials.contains_key("footer"));
//! # Ok::<(), rs_partials::Error>(())
//! ```

pub mod naming;
pub mod pipeline;
pub mod rewrite;
pub mod state;

pub use pipeline::split_tree;
pub use state::{ExtractionContext, NameAssignment};

use crate::dom::NodeId;

/// One extracted partial before placeholder resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    /// Unique slug, used as the file name and in include paths.
    pub name: String,
    /// Captured markup, possibly containing placeholders of deeper partials.
    pub html: String,
    /// The node the markup was captured from. It is detached once replaced.
    pub source: NodeId,
}
