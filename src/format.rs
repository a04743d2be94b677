//! Tab-indented HTML pretty-printer.
//!
//! Each element, comment and non-empty text run goes on its own line, one tab
//! per nesting level. Elements whose children are all text stay on a single
//! line. Whitespace-only text is dropped and other text is trimmed, except
//! inside raw-text elements and `<pre>`/`<textarea>`, which are kept verbatim.
//! Tags, escaping and void elements are written by html5ever's
//! `HtmlSerializer`; this module only adds the line breaks and indentation.

use std::io;

use html5ever::serialize::{HtmlSerializer, Serialize, SerializeOpts, Serializer, TraversalScope};

use crate::dom::{self, NodeId, NodeKind, Tree};
use crate::error::{Error, Result};
use crate::render::{is_void, is_writable_comment, SerializableNode};

/// Elements written exactly as parsed: raw text and significant whitespace.
const VERBATIM_TAGS: &[&str] = &[
    "pre", "textarea", "listing", "style", "script", "xmp", "iframe", "noembed", "noframes",
    "plaintext", "noscript",
];

/// Parse and pretty-print an HTML document.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the input cannot be parsed and
/// [`Error::RenderError`] if serialization fails.
pub fn format_html(html: &str) -> Result<String> {
    let tree = dom::parse(html)?;
    format_tree(&tree)
}

/// Pretty-print the whole document.
///
/// # Errors
///
/// See [`format_node`].
pub fn format_tree(tree: &Tree) -> Result<String> {
    format_node(tree, tree.root())
}

/// Pretty-print a node and its subtree, starting at indentation level 0.
/// Nodes with no HTML form are left out, as in
/// [`render_document`](crate::render::render_document).
///
/// # Errors
///
/// Returns [`Error::RenderError`] when `id` is not in the arena or the
/// serializer fails.
pub fn format_node(tree: &Tree, id: NodeId) -> Result<String> {
    if tree.get(id).is_none() {
        return Err(Error::RenderError(format!("node {} is not in the tree", id.index())));
    }
    let mut printer = Printer::new();
    printer
        .write_node(tree, id, 0)
        .map_err(|err| Error::RenderError(err.to_string()))?;
    printer.finish()
}

struct Printer {
    ser: HtmlSerializer<Vec<u8>>,
}

impl Printer {
    fn new() -> Self {
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..SerializeOpts::default()
        };
        Self {
            ser: HtmlSerializer::new(Vec::new(), opts),
        }
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.ser.writer).map_err(|err| Error::RenderError(err.to_string()))
    }

    fn indent(&mut self, depth: usize) {
        self.ser.writer.extend(std::iter::repeat_n(b'\t', depth));
    }

    fn newline(&mut self) {
        self.ser.writer.push(b'\n');
    }

    fn write_node(&mut self, tree: &Tree, id: NodeId, depth: usize) -> io::Result<()> {
        let Some(node) = tree.get(id) else {
            return Ok(());
        };

        match &node.kind {
            NodeKind::Document => {
                for &child in &node.children {
                    self.write_node(tree, child, depth)?;
                }
            }
            NodeKind::Doctype(name) => {
                self.ser.write_doctype(name)?;
                self.newline();
            }
            NodeKind::Comment(text) => {
                if is_writable_comment(text) {
                    self.indent(depth);
                    self.ser.write_comment(text)?;
                    self.newline();
                }
            }
            NodeKind::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(());
                }
                let inline = tree.parent(id).is_some_and(|p| has_only_text_children(tree, p));
                if !inline {
                    self.indent(depth);
                }
                self.ser.write_text(trimmed)?;
                if !inline {
                    self.newline();
                }
            }
            NodeKind::Element { name, attrs } => {
                self.indent(depth);

                if VERBATIM_TAGS.contains(&&*name.local) {
                    SerializableNode::new(tree, id).serialize(&mut self.ser, TraversalScope::IncludeNode)?;
                    self.newline();
                    return Ok(());
                }

                self.ser
                    .start_elem(name.clone(), attrs.iter().map(|attr| (&attr.name, attr.value.as_str())))?;

                let block = !is_void(name) && !node.children.is_empty() && !has_only_text_children(tree, id);
                if block {
                    self.newline();
                }
                if !is_void(name) {
                    for &child in &node.children {
                        self.write_node(tree, child, depth + 1)?;
                    }
                }
                if block {
                    self.indent(depth);
                }
                self.ser.end_elem(name.clone())?;
                self.newline();
            }
        }
        Ok(())
    }
}

fn has_only_text_children(tree: &Tree, id: NodeId) -> bool {
    tree.children(id)
        .iter()
        .all(|&c| matches!(tree.kind(c), Some(NodeKind::Text(_))))
}
