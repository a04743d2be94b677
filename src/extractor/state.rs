//! Per-document extraction state.
//!
//! `ExtractionContext` holds every mutable counter one split needs: name
//! usage for collision suffixes and the content-to-name map that makes
//! byte-identical subtrees share a partial. A fresh context is created for
//! each document, so concurrent splits share nothing.

use std::collections::{HashMap, HashSet};

use super::naming;

/// Tracks allocated partial names and the content each name stands for.
#[derive(Debug, Default)]
pub struct ExtractionContext {
    /// Times each base name has been handed out.
    used_bases: HashMap<String, usize>,

    /// Every name handed out, suffixed or not.
    allocated: HashSet<String>,

    /// Trimmed rendered HTML -> partial name.
    name_by_content: HashMap<String, String>,
}

/// Outcome of naming one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAssignment {
    /// First time this content was seen; a new partial must be stored.
    New(String),
    /// Identical content already has a partial under this name.
    Reused(String),
}

impl NameAssignment {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::New(name) | Self::Reused(name) => name,
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }
}

impl ExtractionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for a candidate whose trimmed rendered HTML is `content`.
    ///
    /// Content seen before gets its existing name back. Otherwise `base`
    /// is sanitized (falling back to `component-<ordinal>`) and suffixed
    /// with `-2`, `-3`, … until it is unique within this document.
    pub fn assign(&mut self, content: &str, base: &str, ordinal: usize) -> NameAssignment {
        if let Some(name) = self.name_by_content.get(content) {
            return NameAssignment::Reused(name.clone());
        }

        let mut base = naming::sanitize(base);
        if base.is_empty() {
            base = format!("component-{ordinal}");
        }
        let name = self.allocate(&base);
        self.name_by_content.insert(content.to_string(), name.clone());
        NameAssignment::New(name)
    }

    fn allocate(&mut self, base: &str) -> String {
        let count = self.used_bases.entry(base.to_string()).or_insert(0);
        *count += 1;
        let mut name = if *count == 1 {
            base.to_string()
        } else {
            format!("{base}-{count}")
        };
        while self.allocated.contains(&name) {
            *count += 1;
            name = format!("{base}-{count}");
        }
        self.allocated.insert(name.clone());
        name
    }

    /// Number of distinct partials named so far.
    #[must_use]
    pub fn partial_count(&self) -> usize {
        self.name_by_content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_content_reuses_name() {
        let mut ctx = ExtractionContext::new();

        let first = ctx.assign("<div class=\"card\">x</div>", "div-card", 1);
        let second = ctx.assign("<div class=\"card\">x</div>", "div-card", 2);

        assert_eq!(first, NameAssignment::New("div-card".into()));
        assert_eq!(second, NameAssignment::Reused("div-card".into()));
        assert_eq!(ctx.partial_count(), 1);
    }

    #[test]
    fn test_collisions_get_numeric_suffixes() {
        let mut ctx = ExtractionContext::new();

        assert_eq!(ctx.assign("a", "div-card", 1).name(), "div-card");
        assert_eq!(ctx.assign("b", "div-card", 2).name(), "div-card-2");
        assert_eq!(ctx.assign("c", "div-card", 3).name(), "div-card-3");
    }

    #[test]
    fn test_suffix_never_shadows_natural_name() {
        let mut ctx = ExtractionContext::new();

        assert_eq!(ctx.assign("a", "div-card-2", 1).name(), "div-card-2");
        assert_eq!(ctx.assign("b", "div-card", 2).name(), "div-card");
        assert_eq!(ctx.assign("c", "div-card", 3).name(), "div-card-3");
    }

    #[test]
    fn test_empty_base_falls_back_to_ordinal() {
        let mut ctx = ExtractionContext::new();

        assert_eq!(ctx.assign("a", "***", 7).name(), "component-7");
        assert!(ctx.assign("a", "***", 8).name() == "component-7");
    }
}
