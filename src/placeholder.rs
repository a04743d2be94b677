//! Placeholder markers and include resolution.
//!
//! While the tree is rewritten, each extracted subtree is replaced by a
//! comment node `<!--EJS_INCLUDE:<nonce>:<name>-->`. Comments survive
//! rendering and pretty-printing untouched, so after everything is
//! serialized a single string pass swaps every marker for an EJS include.
//! The same resolver is applied to the main document and to every partial
//! body, which covers partials nested at any depth.
//!
//! The nonce is picked per document so that its marker prefix occurs
//! nowhere in the source. Marker-like text already in the page, in a
//! comment, a script string or an attribute, never matches and is written
//! back unchanged.

use std::collections::HashMap;

use crate::dom::{NodeKind, Tree};
use crate::patterns::PLACEHOLDER_COMMENT;

/// Prefix of a placeholder comment's text.
pub const MARKER_PREFIX: &str = "EJS_INCLUDE:";

/// Distinguishes this run's placeholders from look-alikes in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nonce(u32);

impl Nonce {
    /// The smallest nonce whose marker prefix appears in no text, comment,
    /// doctype or attribute of `tree`.
    #[must_use]
    pub fn for_tree(tree: &Tree) -> Self {
        let mut haystacks: Vec<&str> = Vec::new();
        for id in tree.descendants(tree.root()) {
            match tree.kind(id) {
                Some(NodeKind::Text(text) | NodeKind::Comment(text) | NodeKind::Doctype(text)) => {
                    haystacks.push(text);
                }
                Some(NodeKind::Element { attrs, .. }) => {
                    haystacks.extend(attrs.iter().map(|a| a.value.as_str()));
                    haystacks.extend(attrs.iter().map(|a| &*a.name.local));
                }
                _ => {}
            }
        }
        haystacks.retain(|h| h.contains(MARKER_PREFIX));

        let mut nonce = Self(0);
        while haystacks.iter().any(|h| h.contains(&nonce.prefix())) {
            nonce.0 += 1;
        }
        nonce
    }

    fn prefix(self) -> String {
        format!("{MARKER_PREFIX}{}:", self.0)
    }

    /// Comment text for the placeholder of partial `name`.
    ///
    /// ```rust
    /// use rs_partials::placeholder::Nonce;
    ///
    /// assert_eq!(Nonce::default().marker_text("div-card"), "EJS_INCLUDE:0:div-card");
    /// ```
    #[must_use]
    pub fn marker_text(self, name: &str) -> String {
        format!("{}{name}", self.prefix())
    }
}

/// EJS unescaped-output include for a partial.
///
/// ```rust
/// use rs_partials::placeholder::include_directive;
///
/// assert_eq!(include_directive("partials", "nav-main"), "<%- include('partials/nav-main') %>");
/// ```
#[must_use]
pub fn include_directive(partials_dir: &str, name: &str) -> String {
    format!("<%- include('{partials_dir}/{name}') %>")
}

/// Maps this run's placeholder comments to include directives.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderResolver {
    nonce: String,
    replacements: HashMap<String, String>,
}

impl PlaceholderResolver {
    /// Build a resolver for the given partial names.
    pub fn new<'a>(nonce: Nonce, names: impl IntoIterator<Item = &'a str>, partials_dir: &str) -> Self {
        let replacements = names
            .into_iter()
            .map(|name| (name.to_string(), include_directive(partials_dir, name)))
            .collect();
        Self {
            nonce: nonce.0.to_string(),
            replacements,
        }
    }

    /// Replace every known placeholder in `content`. Markers with another
    /// nonce or an unknown name are left untouched.
    #[must_use]
    pub fn resolve(&self, content: &str) -> String {
        PLACEHOLDER_COMMENT
            .replace_all(content, |caps: &regex::Captures| {
                let marker = &caps[0];
                if caps[1] != self.nonce {
                    return marker.to_string();
                }
                self.replacements
                    .get(&caps[2])
                    .map_or_else(|| marker.to_string(), Clone::clone)
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_nonce_skips_prefixes_present_in_source() {
        let clean = dom::parse("<p>EJS_INCLUDE text</p>").unwrap();
        assert_eq!(Nonce::for_tree(&clean), Nonce(0));

        let taken = dom::parse(
            r#"<!--EJS_INCLUDE:0:nav--><script>var s = "<!--EJS_INCLUDE:1:x-->";</script><a title="EJS_INCLUDE:2:y">a</a>"#,
        )
        .unwrap();
        assert_eq!(Nonce::for_tree(&taken), Nonce(3));
    }

    #[test]
    fn test_resolve_replaces_every_occurrence() {
        let resolver = PlaceholderResolver::new(Nonce(0), ["nav", "div-card"], "partials");
        let html = "<body>\n\t<!--EJS_INCLUDE:0:nav-->\n\t<!--EJS_INCLUDE:0:div-card-->\n\t<!--EJS_INCLUDE:0:div-card-->\n</body>";

        assert_eq!(
            resolver.resolve(html),
            "<body>\n\t<%- include('partials/nav') %>\n\t<%- include('partials/div-card') %>\n\t<%- include('partials/div-card') %>\n</body>"
        );
    }

    #[test]
    fn test_resolve_does_not_confuse_prefix_names() {
        let resolver = PlaceholderResolver::new(Nonce(0), ["div-card", "div-card-2"], "views/partials");
        let html = "<!--EJS_INCLUDE:0:div-card-2--><!--EJS_INCLUDE:0:div-card-->";

        assert_eq!(
            resolver.resolve(html),
            "<%- include('views/partials/div-card-2') %><%- include('views/partials/div-card') %>"
        );
    }

    #[test]
    fn test_resolve_leaves_unknown_markers() {
        let resolver = PlaceholderResolver::new(Nonce(0), ["a"], "partials");
        let html = "<!--EJS_INCLUDE:0:b--><p>EJS_INCLUDE text</p>";

        assert_eq!(resolver.resolve(html), html);
    }

    #[test]
    fn test_resolve_ignores_other_nonces() {
        let resolver = PlaceholderResolver::new(Nonce(1), ["nav"], "partials");
        let html = "<!--EJS_INCLUDE:0:nav--><!--EJS_INCLUDE:1:nav--><!--EJS_INCLUDE:nav-->";

        assert_eq!(
            resolver.resolve(html),
            "<!--EJS_INCLUDE:0:nav--><%- include('partials/nav') %><!--EJS_INCLUDE:nav-->"
        );
    }
}
