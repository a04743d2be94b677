//! Tree rewriting.
//!
//! The only code that mutates a parsed tree. An extracted candidate is
//! swapped for a placeholder comment at its exact sibling index and leaves
//! the live document.

use crate::dom::{NodeId, Tree};
use crate::placeholder::Nonce;

/// Replace `node` with the placeholder for partial `name`.
///
/// Returns the placeholder's id, or `None` if `node` was already detached.
pub fn replace_with_placeholder(tree: &mut Tree, node: NodeId, nonce: Nonce, name: &str) -> Option<NodeId> {
    tree.replace_with_comment(node, &nonce.marker_text(name))
}
