//! Candidate merge and ordering.
//!
//! Nested components and top-level boundaries are unioned, deduplicated by
//! node and ordered deepest first. Extraction must follow this order: a
//! descendant has to be captured and replaced before any ancestor's markup
//! is rendered, or it would leave the live tree inside the ancestor's
//! partial without getting a name of its own.

use std::collections::{HashMap, HashSet};

use crate::dom::{NodeId, Tree};
use crate::options::Options;

use super::boundary::select_boundaries;
use super::filter::is_component_candidate;
use super::pattern::{collect_nested, PatternKey};

/// A node scheduled for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    pub depth: usize,
    pub pattern_key: PatternKey,
    /// Whether the node came from boundary selection rather than the
    /// nested component search.
    pub top_level: bool,
}

/// All extraction candidates below `root`, deepest first. Candidates at the
/// same depth keep document order.
#[must_use]
pub fn collect_candidates(tree: &Tree, root: NodeId, options: &Options) -> Vec<Candidate> {
    let boundaries = select_boundaries(tree, root, options);
    let scopes = if boundaries.is_empty() {
        vec![root]
    } else {
        boundaries.clone()
    };
    let nested = collect_nested(tree, &scopes, options);

    let top_level: HashSet<NodeId> = boundaries.iter().copied().collect();
    let order: HashMap<NodeId, usize> = tree
        .descendants(tree.root())
        .into_iter()
        .enumerate()
        .map(|(position, node)| (node, position))
        .collect();

    let mut seen = HashSet::new();
    let mut candidates: Vec<Candidate> = nested
        .into_iter()
        .chain(boundaries)
        .filter(|&node| seen.insert(node))
        .filter(|&node| is_component_candidate(tree, node))
        .filter_map(|node| {
            Some(Candidate {
                node,
                depth: tree.depth(node),
                pattern_key: PatternKey::of(tree, node)?,
                top_level: top_level.contains(&node),
            })
        })
        .collect();

    candidates.sort_by_key(|c| {
        (
            std::cmp::Reverse(c.depth),
            order.get(&c.node).copied().unwrap_or(usize::MAX),
        )
    });
    candidates
}
