//! HTML serialization of arena nodes.
//!
//! Nodes are fed to html5ever's `HtmlSerializer`, which owns escaping,
//! raw-text elements and void end tags. Two shapes have no HTML form at all:
//! a void element with children and a comment containing `-->`.
//! [`render_node`] rejects them, [`render_document`] leaves them out.

use std::io;

use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{ns, QualName};

use crate::dom::{NodeId, NodeKind, Tree};
use crate::error::{Error, Result};

/// HTML elements that never have an end tag or children.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

#[inline]
#[must_use]
pub fn is_void(name: &QualName) -> bool {
    name.ns == ns!(html) && VOID_TAGS.contains(&&*name.local)
}

/// Whether a comment with this text can be written back as `<!--text-->`.
#[inline]
#[must_use]
pub fn is_writable_comment(text: &str) -> bool {
    !text.contains("-->")
}

/// Serializable view of one arena subtree.
pub struct SerializableNode<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> SerializableNode<'a> {
    #[must_use]
    pub fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self { tree, id }
    }
}

enum SerializeOp<'a> {
    Open(NodeId),
    Close(&'a QualName),
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let tree = self.tree;
        let children = move |id: NodeId| tree.children(id).iter().rev().map(|&c| SerializeOp::Open(c));

        let mut ops: Vec<SerializeOp> = match traversal_scope {
            TraversalScope::IncludeNode => vec![SerializeOp::Open(self.id)],
            TraversalScope::ChildrenOnly(_) => children(self.id).collect(),
        };

        while let Some(op) = ops.pop() {
            match op {
                SerializeOp::Open(id) => match tree.kind(id) {
                    Some(NodeKind::Document) => ops.extend(children(id)),
                    Some(NodeKind::Doctype(name)) => serializer.write_doctype(name)?,
                    Some(NodeKind::Text(text)) => serializer.write_text(text)?,
                    Some(NodeKind::Comment(text)) => {
                        if is_writable_comment(text) {
                            serializer.write_comment(text)?;
                        }
                    }
                    Some(NodeKind::Element { name, attrs }) => {
                        serializer.start_elem(
                            name.clone(),
                            attrs.iter().map(|attr| (&attr.name, attr.value.as_str())),
                        )?;
                        ops.push(SerializeOp::Close(name));
                        if !is_void(name) {
                            ops.extend(children(id));
                        }
                    }
                    None => {}
                },
                SerializeOp::Close(name) => serializer.end_elem(name.clone())?,
            }
        }

        Ok(())
    }
}

/// Why `id` itself has no HTML serialization, if it has none.
fn unserializable(tree: &Tree, id: NodeId) -> Option<String> {
    match tree.kind(id)? {
        NodeKind::Comment(text) if !is_writable_comment(text) => {
            Some(format!("comment text cannot contain \"-->\": {text:?}"))
        }
        NodeKind::Element { name, .. } if is_void(name) && !tree.children(id).is_empty() => {
            Some(format!("void element <{}> has child nodes", name.local))
        }
        _ => None,
    }
}

/// Number of nodes at or below `id` that serialization has to leave out.
#[must_use]
pub fn unserializable_count(tree: &Tree, id: NodeId) -> usize {
    std::iter::once(id)
        .chain(tree.descendants(id))
        .filter(|&n| unserializable(tree, n).is_some())
        .count()
}

fn write_to_string(tree: &Tree, id: NodeId) -> Result<String> {
    let mut buf = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..SerializeOpts::default()
    };
    serialize(&mut buf, &SerializableNode::new(tree, id), opts)
        .map_err(|err| Error::RenderError(err.to_string()))?;
    String::from_utf8(buf).map_err(|err| Error::RenderError(err.to_string()))
}

/// Serialize a node and its subtree.
///
/// # Errors
///
/// Returns [`Error::RenderError`] when `id` is not in the arena, or when a
/// void element with children or a comment containing `-->` sits anywhere
/// in the subtree.
pub fn render_node(tree: &Tree, id: NodeId) -> Result<String> {
    if tree.get(id).is_none() {
        return Err(Error::RenderError(format!("node {} is not in the tree", id.index())));
    }
    if let Some(reason) = std::iter::once(id)
        .chain(tree.descendants(id))
        .find_map(|n| unserializable(tree, n))
    {
        return Err(Error::RenderError(reason));
    }
    write_to_string(tree, id)
}

/// Serialize the whole document, leaving out nodes that have no HTML form.
///
/// # Errors
///
/// Returns [`Error::RenderError`] only if the serializer itself fails.
pub fn render_document(tree: &Tree) -> Result<String> {
    write_to_string(tree, tree.root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{self, NodeKind};

    fn render_first(html: &str, tag: &str) -> String {
        let tree = dom::parse(html).unwrap();
        let id = tree.find_element(tree.root(), tag).unwrap();
        render_node(&tree, id).unwrap()
    }

    #[test]
    fn test_render_element_with_attributes() {
        let html = render_first(r#"<div class="card" id="x"><p>Hi</p></div>"#, "div");
        assert_eq!(html, r#"<div class="card" id="x"><p>Hi</p></div>"#);
    }

    #[test]
    fn test_render_escapes_text_and_attributes() {
        let html = render_first(r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3</p>"#, "p");
        assert_eq!(html, r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3</p>"#);
    }

    #[test]
    fn test_render_raw_text_is_verbatim() {
        let html = render_first("<div><script>if (a < b && c) {}</script></div>", "script");
        assert_eq!(html, "<script>if (a < b && c) {}</script>");
    }

    #[test]
    fn test_render_void_elements_have_no_end_tag() {
        let html = render_first(r#"<p>a<br>b<img src="x.png"></p>"#, "p");
        assert_eq!(html, r#"<p>a<br>b<img src="x.png"></p>"#);
    }

    #[test]
    fn test_render_comment_and_doctype() {
        let tree = dom::parse("<!DOCTYPE html><html><body><!--hello--></body></html>").unwrap();
        let html = render_document(&tree).unwrap();

        assert!(html.starts_with("<!DOCTYPE html><html>"));
        assert!(html.contains("<body><!--hello--></body>"));
    }

    #[test]
    fn test_render_keeps_svg_prefixes_and_case() {
        let html = render_first(
            r##"<div><svg xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 8 8"><linearGradient id="g"></linearGradient><use xlink:href="#i"></use></svg></div>"##,
            "svg",
        );
        assert_eq!(
            html,
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 8 8"><linearGradient id="g"></linearGradient><use xlink:href="#i"></use></svg>"##
        );
    }

    #[test]
    fn test_render_template_contents() {
        let html = render_first(r#"<div><template id="row"><p class="x">Row</p></template></div>"#, "template");
        assert_eq!(html, r#"<template id="row"><p class="x">Row</p></template>"#);
    }

    #[test]
    fn test_render_rejects_comment_with_terminator() {
        let mut tree = dom::parse("<div><span>x</span></div>").unwrap();
        let span = tree.find_element(tree.root(), "span").unwrap();
        let div = tree.find_element(tree.root(), "div").unwrap();
        tree.replace_with_comment(span, "bad --> text").unwrap();

        let err = render_node(&tree, div).unwrap_err();
        assert!(matches!(err, Error::RenderError(_)));
    }

    #[test]
    fn test_render_rejects_void_with_children() {
        let mut tree = dom::parse("<div><br></div>").unwrap();
        let br = tree.find_element(tree.root(), "br").unwrap();
        let text = tree.push(NodeKind::Text("oops".into()));
        tree.append_child(br, text);

        assert!(matches!(render_node(&tree, br), Err(Error::RenderError(_))));
    }

    #[test]
    fn test_document_render_leaves_out_nodes_without_html_form() {
        let mut tree = dom::parse("<div><span>x</span><br><p>kept</p></div>").unwrap();
        let span = tree.find_element(tree.root(), "span").unwrap();
        let br = tree.find_element(tree.root(), "br").unwrap();
        tree.replace_with_comment(span, "bad --> text").unwrap();
        let text = tree.push(NodeKind::Text("oops".into()));
        tree.append_child(br, text);

        assert_eq!(unserializable_count(&tree, tree.root()), 2);
        let html = render_document(&tree).unwrap();
        assert!(html.contains("<div><br><p>kept</p></div>"));
    }
}
