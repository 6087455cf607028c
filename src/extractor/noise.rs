//! Elements whose text is never page content.
//!
//! Nothing below a noise element is visible to the field selectors, so the
//! check covers the element itself and every ancestor.

use ego_tree::iter::Edge;
use scraper::{ElementRef, node::Node};

pub const NOISE_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "template"];

pub fn is_noise_tag(name: &str) -> bool {
    NOISE_TAGS.contains(&name)
}

/// True when neither the element nor any ancestor is a noise element.
pub fn is_visible(element: &ElementRef<'_>) -> bool {
    if is_noise_tag(element.value().name()) {
        return false;
    }
    !element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_noise_tag(ancestor.value().name()))
}

/// Descendant text nodes in document order, each trimmed, empties dropped.
/// Subtrees rooted at noise elements are skipped.
///
/// Iterative, since nesting depth in fetched pages is unbounded.
pub fn text_fragments<'a>(element: &ElementRef<'a>) -> Vec<&'a str> {
    let mut out = Vec::new();
    // Number of noise elements currently open around the cursor.
    let mut noise_depth = 0usize;
    for child in element.children() {
        for edge in child.traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(el) if is_noise_tag(el.name()) => noise_depth += 1,
                    Node::Text(text) if noise_depth == 0 => {
                        let trimmed = text.trim();
                        if !trimmed.is_empty() {
                            out.push(trimmed);
                        }
                    }
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(el) = node.value()
                        && is_noise_tag(el.name())
                    {
                        noise_depth -= 1;
                    }
                }
            }
        }
    }
    out
}

/// Fragments joined with single spaces.
pub fn flatten_text(element: &ElementRef<'_>) -> String {
    text_fragments(element).join(" ")
}
