//! Utility functions for selector pattern matching
//!
//! Attribute access helpers shared by the boundary, pattern and filter rules.
//! Missing attributes read as empty strings so rules can match without
//! unwrapping.

use crate::dom::{NodeId, Tree};

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(tree: &Tree, node: NodeId) -> &str {
    tree.attr_or_empty(node, "id")
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(tree: &Tree, node: NodeId) -> &str {
    tree.attr_or_empty(node, "class")
}

/// Get tag name (empty string for non-elements)
#[inline]
#[must_use]
pub fn tag(tree: &Tree, node: NodeId) -> &str {
    tree.tag(node).unwrap_or_default()
}

/// Lowercased class and id joined by a space, for keyword checks.
///
/// # Example
///
/// ```rust
/// use rs_partials::dom;
/// use rs_partials::selector::utils;
///
/// let tree = dom::parse(r#"<div id="Top" class="Hero Banner">x</div>"#)?;
/// let div = tree.find_element(tree.root(), "div").unwrap();
///
/// assert_eq!(utils::id_class(&tree, div), "hero banner top");
/// # Ok::<(), rs_partials::Error>(())
/// ```
#[must_use]
pub fn id_class(tree: &Tree, node: NodeId) -> String {
    format!("{} {}", class(tree, node), id(tree, node)).to_lowercase()
}

/// Whitespace-separated class tokens, in source order.
#[must_use]
pub fn class_list(tree: &Tree, node: NodeId) -> Vec<&str> {
    class(tree, node).split_whitespace().collect()
}

// === Element Type Checks ===

/// Check if element is one of the specified tags
#[inline]
#[must_use]
pub fn is_one_of_tags(tree: &Tree, node: NodeId, tags: &[&str]) -> bool {
    tree.tag(node).is_some_and(|t| tags.contains(&t))
}
