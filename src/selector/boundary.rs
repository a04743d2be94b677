//! Top-level boundary selection.
//!
//! Boundaries are the coarse extraction units: semantic sections (`<nav>`,
//! `<header>`, `<section>`, …) or elements whose class/id names a page
//! section (`hero`, `pricing`, `navbar`, …). When a page has fewer than two
//! of those, the content root's children are used instead.

use crate::dom::{NodeId, Tree};
use crate::options::Options;

use super::filter::{
    content_children, filter_candidates, has_component_keyword, is_layout_container,
    is_section_boundary,
};

/// Section boundaries below `root` in document order, searched to
/// `max_depth` levels. The search does not descend into a boundary once
/// found.
#[must_use]
pub fn collect_section_boundaries(tree: &Tree, root: NodeId, max_depth: usize) -> Vec<NodeId> {
    let mut found = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = tree
        .element_children(root)
        .into_iter()
        .rev()
        .map(|c| (c, 1))
        .collect();

    while let Some((node, level)) = stack.pop() {
        if level > max_depth {
            continue;
        }
        if is_section_boundary(tree, node) {
            found.push(node);
            continue;
        }
        stack.extend(
            tree.element_children(node)
                .into_iter()
                .rev()
                .map(|c| (c, level + 1)),
        );
    }

    found
}

/// The ordered top-level candidates below the content root.
///
/// Returns an empty list when neither the section search nor the
/// structural fallback yields at least two siblings to split on; the page
/// is then searched for nested components only. The structural fallback
/// never offers a bare layout container (`wrapper`, `container`, … without
/// a component keyword) as a unit of its own.
#[must_use]
pub fn select_boundaries(tree: &Tree, root: NodeId, options: &Options) -> Vec<NodeId> {
    let sections = collect_section_boundaries(tree, root, options.boundary_depth);
    if sections.len() > 1 {
        return sections;
    }

    let children = filter_candidates(tree, &content_children(tree, root));
    let units = match children.as_slice() {
        [only] => structural_units(tree, *only),
        _ => without_bare_layout(tree, children),
    };
    if units.len() > 1 {
        return units;
    }

    Vec::new()
}

fn structural_units(tree: &Tree, node: NodeId) -> Vec<NodeId> {
    without_bare_layout(tree, filter_candidates(tree, &content_children(tree, node)))
}

fn without_bare_layout(tree: &Tree, mut nodes: Vec<NodeId>) -> Vec<NodeId> {
    nodes.retain(|&n| !is_layout_container(tree, n) || has_component_keyword(tree, n));
    nodes
}
