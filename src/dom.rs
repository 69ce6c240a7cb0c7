//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` so the resolvers read in terms of the few
//! DOM operations they actually need: text, attributes, parent context,
//! non-panicking selector probes and class markers.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, treating an empty value as absent.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name).filter(|v| !v.is_empty())
}

// === Text Content ===

/// Get text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Combined class list and id of the parent element, lowercased.
///
/// Returns a single space when the element has no parent element.
#[must_use]
pub fn parent_context(sel: &Selection) -> String {
    let parent = sel.parent();
    let classes = class_name(&parent).unwrap_or_default();
    let parent_id = id(&parent).unwrap_or_default();
    format!("{classes} {parent_id}").to_lowercase()
}

// === Querying ===

/// Query all elements matching a CSS selector, one selection per element,
/// in document order.
///
/// An invalid selector behaves like a selector with no matches.
#[must_use]
pub fn try_query_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.try_select(selector)
        .map(|matched| matched.nodes().iter().map(|node| Selection::from(*node)).collect())
        .unwrap_or_default()
}

/// Query the first element matching a CSS selector.
///
/// An invalid selector behaves like a selector with no matches.
#[must_use]
pub fn try_query<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.try_select(selector)
        .and_then(|matched| matched.nodes().first().map(|node| Selection::from(*node)))
}

// === Class Markers ===

/// Add a class to every element of the selection.
#[inline]
pub fn add_class(sel: &Selection, class: &str) {
    sel.add_class(class);
}

/// Remove a class from every element of the selection. No-op when absent.
#[inline]
pub fn remove_class(sel: &Selection, class: &str) {
    sel.remove_class(class);
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
