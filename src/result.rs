//! Result types for extraction output.
//!
//! [`ExtractionResult`] is the durable record handed to callers and to the
//! webhook transport. [`HighlightSelection`] borrows elements of the page
//! and lives only as long as the page does.

use serde::{Deserialize, Serialize};

use crate::dom::{NodeRef, Selection};
use crate::summary::NO_SUMMARY;
use crate::title::NO_TITLE;

/// Everything extracted from one page.
///
/// `title` and `summary` are never empty: when nothing is found they hold
/// the sentinels [`NO_TITLE`] and [`NO_SUMMARY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    pub url: String,
    /// Hostname of `url`.
    pub domain: String,
    /// ISO-8601 UTC extraction time.
    pub timestamp: String,
}

impl ExtractionResult {
    /// Whether anything beyond the sentinels was found.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        self.title != NO_TITLE || self.summary != NO_SUMMARY
    }
}

/// Optional page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub author: Option<String>,
    pub publish_date: Option<String>,
}

/// Reference to a single element of a page.
///
/// Two references are equal when they point at the same node.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    node: NodeRef<'a>,
}

impl<'a> ElementRef<'a> {
    /// First element of a selection, if any.
    #[must_use]
    pub fn from_selection(sel: &Selection<'a>) -> Option<Self> {
        sel.nodes().first().map(|node| Self { node: *node })
    }

    #[must_use]
    pub fn selection(&self) -> Selection<'a> {
        Selection::from(self.node)
    }

    /// Trimmed text content of the element.
    #[must_use]
    pub fn text(&self) -> String {
        self.selection().text().trim().to_string()
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id == other.node.id
    }
}

impl Eq for ElementRef<'_> {}

impl std::fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ElementRef").field(&self.node.id).finish()
    }
}

/// Elements to mark so the user sees what would be extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightSelection<'a> {
    pub title_element: Option<ElementRef<'a>>,
    pub paragraph_element: Option<ElementRef<'a>>,
}

impl HighlightSelection<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title_element.is_none() && self.paragraph_element.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            title: "Headline".to_string(),
            summary: "Summary text".to_string(),
            author: None,
            publish_date: Some("2024-01-02".to_string()),
            url: "https://example.com/a".to_string(),
            domain: "example.com".to_string(),
            timestamp: "2024-01-02T03:04:05.678Z".to_string(),
        }
    }

    #[test]
    fn serializes_camel_case_and_skips_missing_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["publishDate"], "2024-01-02");
        assert!(json.get("author").is_none());
        assert_eq!(json["domain"], "example.com");
    }

    #[test]
    fn meaningful_unless_both_sentinels() {
        let mut result = sample();
        assert!(result.is_meaningful());

        result.title = NO_TITLE.to_string();
        assert!(result.is_meaningful());

        result.summary = NO_SUMMARY.to_string();
        assert!(!result.is_meaningful());
    }

    #[test]
    fn element_refs_compare_by_node() {
        let doc = Document::from("<p id='a'>one</p><p id='b'>two</p>");
        let a1 = ElementRef::from_selection(&doc.select("#a")).unwrap();
        let a2 = ElementRef::from_selection(&doc.select("p")).unwrap();
        let b = ElementRef::from_selection(&doc.select("#b")).unwrap();

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(b.text(), "two");
        assert!(ElementRef::from_selection(&doc.select("span")).is_none());
    }
}
