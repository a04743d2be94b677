//! Split pipeline.
//!
//! Parse, pick the content root, collect candidates deepest first, capture
//! and replace each one, render the rewritten page, then resolve every
//! placeholder in the page and in the partial bodies.

use tracing::{debug, warn};

use crate::dom::{self, NodeId, Tree};
use crate::error::Result;
use crate::format::{format_node, format_tree};
use crate::options::Options;
use crate::placeholder::{Nonce, PlaceholderResolver};
use crate::render::{render_document, render_node, unserializable_count};
use crate::result::SplitResult;
use crate::selector::{collect_candidates, root::select_root, utils};

use super::naming;
use super::rewrite;
use super::state::ExtractionContext;
use super::Partial;

/// Parse `html` and split it.
pub(crate) fn split_document(html: &str, options: &Options) -> Result<SplitResult> {
    let mut tree = dom::parse(html)?;
    split_tree(&mut tree, options)
}

/// Split an already parsed tree in place.
///
/// On return the tree holds the rewritten main document, with placeholder
/// comments where partials were cut out.
///
/// Candidates that fail to render are skipped, and nodes of the main
/// document that have no HTML form are left out; both are reported in
/// [`SplitResult::warnings`].
///
/// # Errors
///
/// Returns [`crate::Error::RenderError`] only if the serializer itself fails.
pub fn split_tree(tree: &mut Tree, options: &Options) -> Result<SplitResult> {
    let mut warnings = Vec::new();
    let nonce = Nonce::for_tree(tree);

    let partials = match tree.find_element(tree.root(), "body") {
        Some(body) => extract_partials(tree, body, nonce, options, &mut warnings),
        None => {
            debug!("document has no <body>; nothing to split");
            Vec::new()
        }
    };

    let rendered = render_main(tree, options, &mut warnings)?;
    let resolver = PlaceholderResolver::new(
        nonce,
        partials.iter().map(|p| p.name.as_str()),
        &options.partials_dir,
    );

    let main_html = resolver.resolve(&rendered);
    let partials = partials
        .into_iter()
        .map(|p| {
            let body = resolver.resolve(&p.html);
            (p.name, body)
        })
        .collect();

    Ok(SplitResult {
        main_html,
        partials,
        warnings,
    })
}

fn extract_partials(
    tree: &mut Tree,
    body: NodeId,
    nonce: Nonce,
    options: &Options,
    warnings: &mut Vec<String>,
) -> Vec<Partial> {
    let root = select_root(tree, body, options);
    let candidates = collect_candidates(tree, root, options);
    debug!(
        root = utils::tag(tree, root),
        candidates = candidates.len(),
        top_level = candidates.iter().filter(|c| c.top_level).count(),
        "selected extraction candidates"
    );

    let mut ctx = ExtractionContext::new();
    let mut partials = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let raw = match render_node(tree, candidate.node) {
            Ok(html) => html,
            Err(err) => {
                warn!(pattern = %candidate.pattern_key, %err, "candidate failed to render; left in place");
                warnings.push(format!(
                    "Skipped <{}> candidate: {err}",
                    candidate.pattern_key
                ));
                continue;
            }
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let base = naming::base_name(tree, candidate.node);
        let assignment = ctx.assign(trimmed, &base, index + 1);

        if assignment.is_new() {
            let html = if options.format_partials {
                format_node(tree, candidate.node).unwrap_or(raw)
            } else {
                raw
            };
            partials.push(Partial {
                name: assignment.name().to_string(),
                html,
                source: candidate.node,
            });
        }

        if rewrite::replace_with_placeholder(tree, candidate.node, nonce, assignment.name()).is_none() {
            debug!(name = assignment.name(), "candidate was already detached");
        }
    }

    debug!(partials = ctx.partial_count(), "extraction finished");
    partials
}

fn render_main(tree: &Tree, options: &Options, warnings: &mut Vec<String>) -> Result<String> {
    let dropped = unserializable_count(tree, tree.root());
    if dropped > 0 {
        warn!(dropped, "main document has nodes with no HTML form; leaving them out");
        warnings.push(format!("Left out {dropped} node(s) that cannot be written as HTML"));
    }

    if options.format_output {
        match format_tree(tree) {
            Ok(formatted) => return Ok(formatted),
            Err(err) => {
                warn!(%err, "formatting failed; using unformatted output");
                warnings.push(format!("Formatting failed: {err}"));
            }
        }
    }
    render_document(tree)
}
