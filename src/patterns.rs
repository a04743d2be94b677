//! Keyword lists and compiled patterns used by the selectors.
//!
//! All regexes are compiled once on first use via `LazyLock`. Keyword lists
//! are matched as lowercase substrings of an element's combined class and id.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tag Sets
// =============================================================================

/// Tags that never carry visible page content, including SVG internals.
pub const NON_CONTENT_TAGS: &[&str] = &[
    "script", "style", "link", "meta", "title", "noscript", "svg", "path", "circle", "rect",
    "line", "polygon", "polyline", "defs", "g", "use",
];

/// Semantic tags that always start a section boundary.
pub const SECTION_TAGS: &[&str] = &["nav", "header", "footer", "section", "main", "aside"];

/// Single-child containers that the root selector may skip.
pub const WRAPPER_TAGS: &[&str] = &["div", "main", "section"];

/// Tags an embed-only node may contain without counting as visible content.
pub const EMBED_TAGS: &[&str] = &["style", "script", "link"];

/// Document scaffolding that is never extracted on its own.
pub const SCAFFOLD_TAGS: &[&str] = &["html", "head", "body"];

// =============================================================================
// Keyword Lists
// =============================================================================

/// Class/id fragments marking a page section.
pub const SECTION_KEYWORDS: &[&str] = &[
    "navbar", "nav", "menu", "header", "footer", "hero", "section", "cta", "pricing", "gallery",
    "grid", "slider", "carousel", "tabs", "accordion", "form",
];

/// Class/id fragments marking a reusable component.
pub const COMPONENT_KEYWORDS: &[&str] = &[
    "navbar", "nav", "menu", "header", "footer", "hero", "section", "cta", "button", "btn",
    "card", "tile", "banner", "pricing", "gallery", "feature", "testimonial", "form", "input",
    "field", "dropdown", "modal", "popup", "slider", "carousel", "tabs", "accordion",
];

/// Class/id fragments marking a pure layout container.
pub const LAYOUT_KEYWORDS: &[&str] = &[
    "wrapper", "container", "page", "layout", "root", "app", "site", "content",
];

// =============================================================================
// Compiled Patterns
// =============================================================================

/// Volatile UI-state classes that must not affect a pattern key.
pub static STATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:active|current|open|closed|selected)$|^(?:is|has|js)-|^w--")
        .expect("STATE_CLASS regex")
});

/// Runs of characters that are not allowed in a partial name.
pub static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("NON_SLUG_RUN regex"));

/// A complete, valid partial name.
pub static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("SLUG regex"));

/// A placeholder comment in rendered markup: nonce, then partial name.
pub static PLACEHOLDER_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--EJS_INCLUDE:([0-9]+):([a-z0-9-]+)-->").expect("PLACEHOLDER_COMMENT regex")
});

/// Whether `haystack` contains any keyword from `keywords`.
#[must_use]
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
