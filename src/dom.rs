//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` node references. Wikipedia markup is full of
//! whitespace text nodes between tags, so every positional lookup here works
//! on *real children* (element children only) and returns an `Option`
//! instead of indexing.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, NodeRef, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get the tag name of an element node (lowercase).
///
/// Returns `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Check whether an element node has the given tag name.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Text payload of a text node, `None` for any other node kind.
#[must_use]
pub fn text_data(node: &NodeRef) -> Option<StrTendril> {
    if node.is_text() {
        Some(node.text())
    } else {
        None
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<StrTendril> {
    node.attr(name)
}

/// Check if attribute exists, whatever its value
#[inline]
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.attr(name).is_some()
}

/// Element `id` attribute
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> Option<StrTendril> {
    node.attr("id")
}

/// Check if the `class` attribute lists `class`
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    node.attr("class")
        .is_some_and(|c| c.split_ascii_whitespace().any(|name| name == class))
}

// === Tree Navigation ===

/// Element children of a node, in document order.
///
/// Text nodes (including the whitespace between tags) and comments are
/// dropped, so "the second cell" means the second element.
#[must_use]
pub fn real_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| child.is_element())
        .collect()
}

/// First element child.
#[inline]
#[must_use]
pub fn first_real_child<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    nth_real_child(node, 0)
}

/// Element child at zero-based position `n`.
#[must_use]
pub fn nth_real_child<'a>(node: &NodeRef<'a>, n: usize) -> Option<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| child.is_element())
        .nth(n)
}

/// First element child with the given tag.
#[must_use]
pub fn find_real_child<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    node.children()
        .into_iter()
        .find(|child| is_tag(child, tag))
}

/// First descendant element with the given tag, in document order.
#[must_use]
pub fn first_descendant<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .find(|d| is_tag(d, tag))
}

// === Querying ===

/// Check that a CSS selector parses.
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    Matcher::new(selector).is_ok()
}

/// First node matched by a CSS selector anywhere in the document.
///
/// A selector that does not parse matches nothing.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    let Ok(matcher) = Matcher::new(selector) else {
        log::debug!("invalid CSS selector {selector:?}");
        return None;
    };
    doc.select_matcher(&matcher).nodes().first().copied()
}
