//! Result types for split output.
//!
//! The main template and the partial bodies are final EJS source: every
//! placeholder has already been resolved to an include directive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of splitting an HTML document into partials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Entry template with include directives in place of extracted markup.
    #[serde(rename = "main")]
    pub main_html: String,

    /// Partial name -> EJS body. Names are unique `[a-z0-9-]` slugs.
    pub partials: BTreeMap<String, String>,

    /// Non-fatal problems encountered while splitting, such as candidates
    /// that could not be rendered and were left in place.
    pub warnings: Vec<String>,
}

impl SplitResult {
    /// Whether any partial was extracted.
    #[must_use]
    pub fn has_partials(&self) -> bool {
        !self.partials.is_empty()
    }
}
