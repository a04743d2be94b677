//! Candidate filter rules.
//!
//! Per-node predicates deciding whether an element can become a partial.
//! Exclusions (non-content tags, embed-only wrappers, bare layout
//! containers) are checked before any inclusion rule, so a `<button
//! class="container">` stays in place.

use crate::dom::{NodeId, NodeKind, Tree};
use crate::options::Options;
use crate::patterns::{
    contains_any, COMPONENT_KEYWORDS, EMBED_TAGS, LAYOUT_KEYWORDS, NON_CONTENT_TAGS,
    SCAFFOLD_TAGS, SECTION_KEYWORDS, SECTION_TAGS,
};

use super::utils;

/// Non-elements and tags that carry no visible content.
#[must_use]
pub fn is_non_content(tree: &Tree, node: NodeId) -> bool {
    match tree.tag(node) {
        Some(tag) => NON_CONTENT_TAGS.contains(&tag),
        None => true,
    }
}

/// An element whose only children are `<style>`/`<script>`/`<link>` tags
/// (plus whitespace): an opaque embed rather than a component.
#[must_use]
pub fn is_embed_only(tree: &Tree, node: NodeId) -> bool {
    if !tree.is_element(node) {
        return false;
    }

    let mut has_element = false;
    for &child in tree.children(node) {
        match tree.kind(child) {
            Some(NodeKind::Element { name, .. }) => {
                if !EMBED_TAGS.contains(&&*name.local) {
                    return false;
                }
                has_element = true;
            }
            Some(NodeKind::Text(text)) if !text.trim().is_empty() => return false,
            _ => {}
        }
    }
    has_element
}

/// Direct element children that carry content.
#[must_use]
pub fn content_children(tree: &Tree, node: NodeId) -> Vec<NodeId> {
    tree.children(node)
        .iter()
        .copied()
        .filter(|&c| tree.is_element(c) && !is_non_content(tree, c))
        .collect()
}

/// Whether an element may be extracted at all.
///
/// A non-empty `data-component` attribute opts an element in even when it is
/// document scaffolding; nothing opts in a non-content or embed-only node.
#[must_use]
pub fn is_component_candidate(tree: &Tree, node: NodeId) -> bool {
    if is_non_content(tree, node) || is_embed_only(tree, node) {
        return false;
    }
    if has_component_opt_in(tree, node) {
        return true;
    }
    !utils::is_one_of_tags(tree, node, SCAFFOLD_TAGS)
}

/// Non-empty `data-component` attribute.
#[must_use]
pub fn has_component_opt_in(tree: &Tree, node: NodeId) -> bool {
    tree.attr(node, "data-component").is_some_and(|v| !v.trim().is_empty())
}

/// Keep only nodes that pass [`is_component_candidate`].
#[must_use]
pub fn filter_candidates(tree: &Tree, nodes: &[NodeId]) -> Vec<NodeId> {
    nodes
        .iter()
        .copied()
        .filter(|&n| is_component_candidate(tree, n))
        .collect()
}

/// A semantic section tag, or a class/id naming a page section.
#[must_use]
pub fn is_section_boundary(tree: &Tree, node: NodeId) -> bool {
    if is_non_content(tree, node) || is_embed_only(tree, node) {
        return false;
    }
    if utils::is_one_of_tags(tree, node, SECTION_TAGS) {
        return true;
    }
    contains_any(&utils::id_class(tree, node), SECTION_KEYWORDS)
}

#[must_use]
pub fn has_component_keyword(tree: &Tree, node: NodeId) -> bool {
    contains_any(&utils::id_class(tree, node), COMPONENT_KEYWORDS)
}

#[must_use]
pub fn is_layout_container(tree: &Tree, node: NodeId) -> bool {
    tree.is_element(node) && contains_any(&utils::id_class(tree, node), LAYOUT_KEYWORDS)
}

/// `<button>`, `role="button"`, or a link styled as a button.
#[must_use]
pub fn is_button(tree: &Tree, node: NodeId) -> bool {
    match tree.tag(node) {
        Some("button") => true,
        Some(tag) => {
            if tree.attr_or_empty(node, "role").eq_ignore_ascii_case("button") {
                return true;
            }
            if tag == "a" {
                let class = utils::class(tree, node).to_lowercase();
                return class.contains("button") || class.contains("btn");
            }
            false
        }
        None => false,
    }
}

#[must_use]
pub fn has_identifying_class_or_id(tree: &Tree, node: NodeId) -> bool {
    !utils::class(tree, node).is_empty() || !utils::id(tree, node).is_empty()
}

#[must_use]
pub fn has_meaningful_content(tree: &Tree, node: NodeId, options: &Options) -> bool {
    tree.element_children(node).len() >= options.meaningful_min_children
        || tree.text_len(node) >= options.meaningful_min_text_len
}

/// Decide whether a descendant of a boundary is a component in its own right.
///
/// `pattern_count` is how often the node's pattern key occurred inside the
/// boundary being searched.
#[must_use]
pub fn should_select_nested(
    tree: &Tree,
    node: NodeId,
    pattern_count: usize,
    options: &Options,
) -> bool {
    if is_non_content(tree, node) || is_embed_only(tree, node) {
        return false;
    }

    let keyword_match = has_component_keyword(tree, node);
    if is_layout_container(tree, node) && !keyword_match {
        return false;
    }

    if is_button(tree, node) || has_component_opt_in(tree, node) {
        return true;
    }

    if keyword_match
        && (!tree.element_children(node).is_empty()
            || tree.text_len(node) >= options.keyword_min_text_len)
    {
        return true;
    }

    pattern_count >= options.min_pattern_repeats
        && has_identifying_class_or_id(tree, node)
        && has_meaningful_content(tree, node, options)
}
