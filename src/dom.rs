//! Document Arena
//!
//! Parses HTML with `dom_query` (html5ever, browser-tolerant error recovery)
//! and copies the result into an index-addressed arena. Nodes refer to each
//! other by [`NodeId`]; detaching a node only clears its parent index and
//! rewrites one slot of the parent's child list, so no reference held by the
//! pipeline can dangle while the tree is being rewritten.
//!
//! Element and attribute names are kept as html5ever [`QualName`]s, so the
//! copy serializes back to the same markup: SVG `xlink:href` keeps its
//! prefix and `<template>` contents are carried over as ordinary children.

use dom_query::{Document, NodeData, NodeRef};
use html5ever::QualName;

use crate::error::{Error, Result};

/// Index of a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single `name="value"` pair, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// The name as written in markup, `prefix:local` for namespaced
    /// attributes.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.name.prefix {
            Some(prefix) => format!("{prefix}:{}", self.name.local),
            None => self.name.local.to_string(),
        }
    }

    /// Compare against a markup name, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        match (&self.name.prefix, name.split_once(':')) {
            (None, _) => str::eq_ignore_ascii_case(&self.name.local, name),
            (Some(prefix), Some((p, local))) => {
                str::eq_ignore_ascii_case(prefix, p) && str::eq_ignore_ascii_case(&self.name.local, local)
            }
            (Some(_), None) => false,
        }
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Doctype(String),
    Element { name: QualName, attrs: Vec<Attribute> },
    Text(String),
    Comment(String),
}

/// A node slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// `None` for the document root and for detached nodes.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena-backed document tree.
///
/// Slot 0 always holds the document node.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree containing only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The document node.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of slots, attached or not.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Allocate a detached node.
    pub(crate) fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append a detached node as the last child of `parent`.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    // === Node Information ===

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|n| &n.kind)
    }

    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Element { .. }))
    }

    /// Local tag name of an element, lowercase for HTML elements.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Element { name, .. }) => Some(&*name.local),
            _ => None,
        }
    }

    /// Attributes of an element in source order (empty for other kinds).
    #[must_use]
    pub fn attrs(&self, id: NodeId) -> &[Attribute] {
        match self.kind(id) {
            Some(NodeKind::Element { attrs, .. }) => attrs,
            _ => &[],
        }
    }

    /// Attribute value, matching the name case-insensitively.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.is_named(name))
            .map(|a| a.value.as_str())
    }

    /// Attribute value or the empty string.
    #[must_use]
    pub fn attr_or_empty(&self, id: NodeId, name: &str) -> &str {
        self.attr(id, name).unwrap_or_default()
    }

    // === Tree Navigation ===

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Direct element children, skipping text and comments.
    #[must_use]
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Number of ancestors between `id` and the top of its tree.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(p) = current {
            depth += 1;
            current = self.parent(p);
        }
        depth
    }

    /// Sibling index of `id` in its parent's child list.
    #[must_use]
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// All nodes below `id` in document order, `id` excluded.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// First element named `tag` at or below `id`, in document order.
    #[must_use]
    pub fn find_element(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        if self.tag(id) == Some(tag) {
            return Some(id);
        }
        self.descendants(id)
            .into_iter()
            .find(|&n| self.tag(n) == Some(tag))
    }

    // === Text Content ===

    /// Total length in characters of every trimmed, non-empty text node in
    /// the subtree.
    #[must_use]
    pub fn text_len(&self, id: NodeId) -> usize {
        std::iter::once(id)
            .chain(self.descendants(id))
            .filter_map(|n| match self.kind(n) {
                Some(NodeKind::Text(text)) => Some(text.trim().chars().count()),
                _ => None,
            })
            .sum()
    }

    // === Tree Manipulation ===

    /// Swap `id` for a new comment node holding `text`, at the same sibling
    /// index. The old node keeps its subtree but loses its parent.
    ///
    /// Returns the comment's id, or `None` when `id` has no parent.
    pub fn replace_with_comment(&mut self, id: NodeId, text: &str) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        let comment = self.push(NodeKind::Comment(text.to_string()));
        self.nodes[comment.0].parent = Some(parent);
        self.nodes[parent.0].children[index] = comment;
        self.nodes[id.0].parent = None;
        Some(comment)
    }
}

// === Parsing ===

/// Parse an HTML document into an arena tree.
///
/// Malformed markup is repaired the way browsers repair it; an error is only
/// returned when no `<html>` element could be produced at all.
///
/// # Errors
///
/// Returns [`Error::ParseError`] when the parser yields no document element.
pub fn parse(html: &str) -> Result<Tree> {
    let document = Document::from(html);
    let mut tree = Tree::new();
    let root = tree.root();

    let mut stack: Vec<(NodeRef, NodeId)> = document
        .root()
        .children()
        .into_iter()
        .rev()
        .map(|child| (child, root))
        .collect();

    while let Some((node, parent)) = stack.pop() {
        let Some(kind) = node_kind(&node) else {
            continue;
        };
        let id = tree.push(kind);
        tree.append_child(parent, id);
        for child in node.children().into_iter().rev() {
            stack.push((child, id));
        }
        // html5ever parks template contents in a fragment outside the tree.
        let contents = node.element_ref().and_then(|el| el.template_contents);
        if let Some(fragment) = contents {
            for child in NodeRef::new(fragment, &document.tree).children().into_iter().rev() {
                stack.push((child, id));
            }
        }
    }

    if tree.find_element(root, "html").is_none() {
        return Err(Error::ParseError("no document element produced".to_string()));
    }
    Ok(tree)
}

fn node_kind(node: &NodeRef) -> Option<NodeKind> {
    if node.is_element() {
        let name = node.qual_name_ref()?.clone();
        let attrs = node
            .attrs()
            .into_iter()
            .map(|attr| Attribute {
                name: attr.name,
                value: attr.value.to_string(),
            })
            .collect();
        return Some(NodeKind::Element { name, attrs });
    }
    if node.is_text() {
        return Some(NodeKind::Text(node.text().to_string()));
    }
    node.query(|tree_node| match &tree_node.data {
        NodeData::Comment { contents } => Some(NodeKind::Comment(contents.to_string())),
        NodeData::Doctype { name, .. } => Some(NodeKind::Doctype(name.to_string())),
        _ => None,
    })
    .flatten()
}
