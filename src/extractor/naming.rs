//! Partial name derivation.
//!
//! A base name is the tag, plus `-<id>` when the element has one or else
//! `-<first class>`. Names are reduced to lowercase `[a-z0-9]` runs joined
//! by single dashes so they are safe as file names and inside include paths.

use crate::dom::{NodeId, Tree};
use crate::patterns::NON_SLUG_RUN;
use crate::selector::utils;

/// Unsanitized base name for an element.
#[must_use]
pub fn base_name(tree: &Tree, node: NodeId) -> String {
    let tag = utils::tag(tree, node);
    let id = utils::id(tree, node).trim();
    if !id.is_empty() {
        return format!("{tag}-{id}");
    }
    match utils::class_list(tree, node).first() {
        Some(first_class) => format!("{tag}-{first_class}"),
        None => tag.to_string(),
    }
}

/// Lowercase, collapse non-`[a-z0-9]` runs to `-`, trim dashes.
///
/// ```rust
/// use rs_partials::extractor::naming::sanitize;
///
/// assert_eq!(sanitize("Section--Hero_Banner!"), "section-hero-banner");
/// assert_eq!(sanitize("__"), "");
/// ```
#[must_use]
pub fn sanitize(name: &str) -> String {
    let lower = name.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn base_of(html: &str, tag: &str) -> String {
        let tree = dom::parse(html).unwrap();
        let node = tree.find_element(tree.root(), tag).unwrap();
        sanitize(&base_name(&tree, node))
    }

    #[test]
    fn test_id_takes_precedence_over_class() {
        assert_eq!(base_of(r#"<nav id="MainNav" class="navbar">x</nav>"#, "nav"), "nav-mainnav");
    }

    #[test]
    fn test_first_class_used_without_id() {
        assert_eq!(base_of(r#"<div class="card featured">x</div>"#, "div"), "div-card");
    }

    #[test]
    fn test_bare_tag() {
        assert_eq!(base_of("<footer>x</footer>", "footer"), "footer");
    }

    #[test]
    fn test_sanitize_collapses_and_trims() {
        assert_eq!(sanitize("div-w-nav_link w--current"), "div-w-nav-link-w-current");
        assert_eq!(sanitize("-a  b-"), "a-b");
        assert_eq!(sanitize("Ünïcode"), "n-code");
    }
}
