//! Structural pattern keys and nested component discovery.
//!
//! A [`PatternKey`] is the tag name plus the element's sorted, deduplicated,
//! lowercased classes with volatile UI-state classes removed, so
//! `<div class="card is-active">` and `<div class="Card">` share a key.
//! Within one boundary the counter tallies keys, and the selector then picks
//! descendants that [`should_select_nested`] accepts.

use std::collections::HashMap;
use std::fmt;

use crate::dom::{NodeId, Tree};
use crate::options::Options;
use crate::patterns::STATE_CLASS;

use super::filter::{is_component_candidate, should_select_nested};
use super::utils;

/// Normalized tag + class signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(String);

impl PatternKey {
    /// Build the key for an element; `None` for other node kinds.
    #[must_use]
    pub fn of(tree: &Tree, node: NodeId) -> Option<Self> {
        let tag = tree.tag(node)?;
        let classes = normalize_class_list(&utils::class_list(tree, node));
        if classes.is_empty() {
            return Some(Self(tag.to_string()));
        }
        Some(Self(format!("{tag}.{}", classes.join("."))))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase, drop state classes, dedupe and sort.
#[must_use]
pub fn normalize_class_list(classes: &[&str]) -> Vec<String> {
    let mut normalized: Vec<String> = classes
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && !STATE_CLASS.is_match(c))
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}

/// Occurrence counts of pattern keys below one subtree.
#[derive(Debug, Default)]
pub struct PatternCounter {
    counts: HashMap<PatternKey, usize>,
}

impl PatternCounter {
    /// Count every candidate descendant of `root` down to `max_depth`
    /// levels. The root itself is not counted.
    #[must_use]
    pub fn count(tree: &Tree, root: NodeId, max_depth: usize) -> Self {
        let mut counter = Self::default();
        walk_elements(tree, root, max_depth, &mut |node| {
            if is_component_candidate(tree, node) {
                if let Some(key) = PatternKey::of(tree, node) {
                    *counter.counts.entry(key).or_default() += 1;
                }
            }
        });
        counter
    }

    #[must_use]
    pub fn get(&self, key: &PatternKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

/// Visit element descendants of `root` at depth `1..=max_depth` in
/// document order.
fn walk_elements(tree: &Tree, root: NodeId, max_depth: usize, visit: &mut impl FnMut(NodeId)) {
    let mut stack: Vec<(NodeId, usize)> = tree
        .element_children(root)
        .into_iter()
        .rev()
        .map(|c| (c, 1))
        .collect();

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            continue;
        }
        visit(node);
        stack.extend(
            tree.element_children(node)
                .into_iter()
                .rev()
                .map(|c| (c, depth + 1)),
        );
    }
}

/// Nested components inside one boundary, in document order.
#[must_use]
pub fn collect_nested_in_root(tree: &Tree, root: NodeId, options: &Options) -> Vec<NodeId> {
    let counter = PatternCounter::count(tree, root, options.nested_depth);
    let mut selected = Vec::new();

    walk_elements(tree, root, options.nested_depth, &mut |node| {
        if !is_component_candidate(tree, node) {
            return;
        }
        let count = PatternKey::of(tree, node).map_or(0, |key| counter.get(&key));
        if should_select_nested(tree, node, count, options) {
            selected.push(node);
        }
    });

    selected
}

/// Nested components across several boundaries. Counting is scoped to each
/// boundary separately.
#[must_use]
pub fn collect_nested(tree: &Tree, roots: &[NodeId], options: &Options) -> Vec<NodeId> {
    roots
        .iter()
        .flat_map(|&root| collect_nested_in_root(tree, root, options))
        .collect()
}
