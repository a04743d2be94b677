//! Content root selection.
//!
//! Pages built by site builders and SPA frameworks tend to nest everything in
//! a few single-child shells (`<div id="app"><main><div class="page">…`).
//! The root selector walks down through such shells so boundary detection
//! starts where the page's real sections are siblings.

use crate::dom::{NodeId, Tree};
use crate::options::Options;
use crate::patterns::WRAPPER_TAGS;

use super::filter::content_children;
use super::utils;

/// Whether a node has a wrapper-shaped tag. Class hints are not consulted:
/// any single-child `div`/`main`/`section` is skippable.
#[must_use]
pub fn is_wrapper_element(tree: &Tree, node: NodeId) -> bool {
    utils::is_one_of_tags(tree, node, WRAPPER_TAGS)
}

/// Descend from `body` through sole wrapper children, at most
/// `options.max_root_depth` levels.
#[must_use]
pub fn select_root(tree: &Tree, body: NodeId, options: &Options) -> NodeId {
    let mut root = body;
    for _ in 0..options.max_root_depth {
        let children = content_children(tree, root);
        match children.as_slice() {
            [only] if is_wrapper_element(tree, *only) => root = *only,
            _ => break,
        }
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn body(tree: &Tree) -> NodeId {
        tree.find_element(tree.root(), "body").unwrap()
    }

    #[test]
    fn test_skips_single_child_shells() {
        let tree = dom::parse(
            "<div id=\"app\"><main><div class=\"page\"><section>a</section><section>b</section></div></main></div>",
        )
        .unwrap();
        let root = select_root(&tree, body(&tree), &Options::default());

        assert_eq!(tree.attr(root, "class"), Some("page"));
    }

    #[test]
    fn test_ignores_scripts_when_counting_children() {
        let tree = dom::parse("<div id=\"app\"><p>a</p><p>b</p></div><script>x</script>").unwrap();
        let root = select_root(&tree, body(&tree), &Options::default());

        assert_eq!(tree.attr(root, "id"), Some("app"));
    }

    #[test]
    fn test_stops_at_non_wrapper_child() {
        let tree = dom::parse("<article><p>a</p></article>").unwrap();
        let b = body(&tree);

        assert_eq!(select_root(&tree, b, &Options::default()), b);
    }

    #[test]
    fn test_respects_depth_limit() {
        let tree = dom::parse(
            "<div id=\"d1\"><div id=\"d2\"><div id=\"d3\"><div id=\"d4\"><div id=\"d5\"><div id=\"d6\"><p>x</p></div></div></div></div></div></div>",
        )
        .unwrap();
        let root = select_root(&tree, body(&tree), &Options::default());
        assert_eq!(tree.attr(root, "id"), Some("d4"));

        let shallow = Options {
            max_root_depth: 1,
            ..Options::default()
        };
        let root = select_root(&tree, body(&tree), &shallow);
        assert_eq!(tree.attr(root, "id"), Some("d1"));
    }
}
