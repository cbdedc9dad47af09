//! Markup sanitizer: parsed-tree walk that keeps only visible text.

use scraper::{Html, Node};

/// Elements whose text content is never rendered to the reader.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "head", "title"];

/// Strip markup from a raw page, returning the visible text joined with
/// single spaces. Malformed or truncated markup is tolerated; parsing is
/// best-effort and this never fails.
pub fn sanitize(raw: &str) -> String {
    let document = Html::parse_document(raw);

    let mut chunks: Vec<String> = Vec::new();
    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            if !visible(&node) {
                continue;
            }
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }
        }
    }

    strip_leftover_tags(&chunks.join(" "))
}

/// A text node is visible unless its nearest element ancestor is hidden.
/// Comments are their own node kind and never reach the text collector.
fn visible(node: &ego_tree::NodeRef<'_, Node>) -> bool {
    for ancestor in node.ancestors() {
        if let Node::Element(element) = ancestor.value() {
            return !HIDDEN_ELEMENTS.contains(&element.name());
        }
    }
    true
}

/// Replace any remaining `<...>` span with a single space. Entity-decoded or
/// badly nested tags can survive the parse as text; a `<` with no closing `>`
/// is kept literal.
fn strip_leftover_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if close > 0 => {
                out.push(' ');
                rest = &after[close + 1..];
            }
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
