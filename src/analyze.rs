//! Component suggestions.
//!
//! A read-only report over the whole document: elements are grouped by
//! their raw pattern key (`tag.class.list#id`), and every group that
//! repeats or has a varied structure is described as a possible component.
//! Nothing is extracted here; see [`crate::split`] for that.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::dom::{self, NodeId, Tree};
use crate::error::Result;
use crate::selector::filter::is_component_candidate;
use crate::selector::utils;

/// A suggested component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSuggestion {
    /// PascalCase component name, e.g. `DivCard`.
    pub name: String,
    pub description: String,
    pub tag_name: String,
    /// Attribute names present on at least half the occurrences.
    pub attributes: Vec<String>,
    /// Child tags present on at least half the occurrences.
    pub children: Vec<String>,
    pub count: usize,
}

#[derive(Debug)]
struct Group {
    key: String,
    tag: String,
    count: usize,
    attributes: BTreeMap<String, usize>,
    children: BTreeMap<String, usize>,
}

/// Analyze `html` and suggest components, most frequent first.
///
/// # Errors
///
/// Returns [`crate::Error::ParseError`] if the input cannot be parsed.
pub fn suggest_components(html: &str) -> Result<Vec<ComponentSuggestion>> {
    let tree = dom::parse(html)?;
    Ok(suggest_from_tree(&tree))
}

/// Suggestions for an already parsed tree.
#[must_use]
pub fn suggest_from_tree(tree: &Tree) -> Vec<ComponentSuggestion> {
    let groups = collect_groups(tree);

    let mut suggestions: Vec<ComponentSuggestion> = groups
        .iter()
        .filter(|g| g.count >= 2 || g.children.len() >= 2)
        .map(suggestion_for)
        .collect();

    suggestions.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    suggestions
}

/// Raw pattern key: tag, then classes joined by `.`, then `#id`.
#[must_use]
pub fn raw_pattern_key(tree: &Tree, node: NodeId) -> String {
    let mut key = utils::tag(tree, node).to_string();
    for class in utils::class_list(tree, node) {
        key.push('.');
        key.push_str(class);
    }
    let id = utils::id(tree, node);
    if !id.is_empty() {
        key.push('#');
        key.push_str(id);
    }
    key
}

fn collect_groups(tree: &Tree) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for node in tree.descendants(tree.root()) {
        if !is_component_candidate(tree, node) {
            continue;
        }

        let key = raw_pattern_key(tree, node);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                tag: utils::tag(tree, node).to_string(),
                count: 0,
                attributes: BTreeMap::new(),
                children: BTreeMap::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];

        group.count += 1;
        for attr in tree.attrs(node) {
            *group.attributes.entry(attr.qualified_name()).or_default() += 1;
        }
        for child in tree.element_children(node) {
            let tag = utils::tag(tree, child);
            *group.children.entry(tag.to_string()).or_default() += 1;
        }
    }

    groups
}

fn suggestion_for(group: &Group) -> ComponentSuggestion {
    let common = |counts: &BTreeMap<String, usize>| -> Vec<String> {
        counts
            .iter()
            .filter(|(_, &n)| 2 * n >= group.count)
            .map(|(name, _)| name.clone())
            .collect()
    };

    ComponentSuggestion {
        name: component_name(&group.tag, &group.key),
        description: describe(group),
        tag_name: group.tag.clone(),
        attributes: common(&group.attributes),
        children: common(&group.children),
        count: group.count,
    }
}

/// PascalCase tag plus a suffix hinted by the pattern key.
///
/// ```rust
/// use rs_partials::analyze::component_name;
///
/// assert_eq!(component_name("div", "div.card.featured"), "DivCard");
/// assert_eq!(component_name("li", "li.nav-item"), "LiItem");
/// assert_eq!(component_name("h2", "h2"), "H2Component");
/// ```
#[must_use]
pub fn component_name(tag: &str, key: &str) -> String {
    let mut chars = tag.chars();
    let mut name: String = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default();

    let key = key.to_lowercase();
    let suffix = if key.contains("card") {
        "Card"
    } else if key.contains("button") {
        "Button"
    } else if key.contains("nav") || key.contains("list") {
        "Item"
    } else if key.contains("form") {
        "Field"
    } else {
        "Component"
    };
    name.push_str(suffix);
    name
}

fn describe(group: &Group) -> String {
    let mut description = format!("A reusable {} component", group.tag);
    if group.count > 1 {
        description.push_str(&format!(" (appears {} times)", group.count));
    }
    if !group.attributes.is_empty() {
        description.push_str(" with configurable attributes");
    }
    if !group.children.is_empty() {
        description.push_str(" and child elements");
    }
    description
}
