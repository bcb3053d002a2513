//! Text content and header / text-priority resolution.
//!
//! A container's implied title is the most prominent text among its direct
//! children: heaviest font weight first, then largest font size, with the
//! earliest sibling winning exact ties.

use lrn_core::NodeClass;
use lrn_core::node::{ContainerNode, Node, NumberOrMixed, TextNode};

const DEFAULT_FONT_WEIGHT: f64 = 400.0;
const DEFAULT_FONT_SIZE: f64 = 0.0;

/// Raw characters of a text node; empty for everything else.
#[must_use]
pub fn text_content(node: &Node) -> &str {
    match node {
        Node::Text(text) => text.characters.as_deref().unwrap_or_default(),
        _ => "",
    }
}

fn font_weight(node: &TextNode) -> f64 {
    node.font_weight
        .and_then(NumberOrMixed::number)
        .unwrap_or(DEFAULT_FONT_WEIGHT)
}

fn font_size(node: &TextNode) -> f64 {
    node.font_size
        .and_then(NumberOrMixed::number)
        .unwrap_or(DEFAULT_FONT_SIZE)
}

/// Whether `candidate` displaces the current `header`.
#[allow(clippy::float_cmp)]
fn outranks(candidate: &TextNode, header: &TextNode) -> bool {
    let (candidate_weight, header_weight) = (font_weight(candidate), font_weight(header));
    candidate_weight > header_weight
        || (candidate_weight == header_weight && font_size(candidate) > font_size(header))
}

/// Untrimmed characters of the most prominent text sibling, or empty when
/// there is none.
#[must_use]
pub fn find_header_text(siblings: &[Node]) -> String {
    let mut text_nodes = siblings.iter().filter_map(|node| match node {
        Node::Text(text) => Some(text),
        _ => None,
    });

    let Some(first) = text_nodes.next() else {
        return String::new();
    };

    let header = text_nodes.fold(first, |header, candidate| {
        if outranks(candidate, header) {
            candidate
        } else {
            header
        }
    });

    header.characters.clone().unwrap_or_default()
}

/// Trimmed characters of the first sibling with non-blank text.
#[must_use]
pub fn find_first_text_content(siblings: &[Node]) -> String {
    siblings
        .iter()
        .map(|node| text_content(node).trim())
        .find(|content| !content.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Header text one level down: only when exactly one direct child is a
/// container, resolve the header among that child's own children.
#[must_use]
pub fn find_header_from_child(container: &ContainerNode) -> String {
    let mut child_containers = container
        .children
        .iter()
        .filter(|child| child.class() == NodeClass::Container);

    match (child_containers.next(), child_containers.next()) {
        (Some(only), None) => find_header_text(only.children().unwrap_or_default()),
        _ => String::new(),
    }
}
