//! Metadata extraction module.
//!
//! Reads optional author and publish date fields. Each field comes from the
//! first element matching an ordered selector list; a field with no match
//! stays unset.

use tracing::debug;

use crate::dom;
use crate::page::Page;
use crate::patterns::{AUTHOR_SELECTORS, DATE_SELECTORS};
use crate::result::PageMetadata;

/// Extract all optional metadata from a page.
///
/// Orchestrates the per-field extractors, each filling only its own field.
#[must_use]
pub fn resolve_metadata(page: &Page) -> PageMetadata {
    let mut metadata = PageMetadata::default();

    metadata = extract_author(page, metadata);
    metadata = extract_publish_date(page, metadata);

    metadata
}

/// First element matching any selector, in selector priority order.
fn first_match<'a>(page: &'a Page, selectors: &[&str]) -> Option<dom::Selection<'a>> {
    selectors.iter().find_map(|selector| page.query(selector))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Author from meta tag, `rel=author` link, or byline classes.
///
/// The matched element's `content` attribute wins over its text.
#[must_use]
pub fn extract_author(page: &Page, original: PageMetadata) -> PageMetadata {
    let mut result = original;

    if let Some(element) = first_match(page, AUTHOR_SELECTORS) {
        result.author = dom::non_empty_attribute(&element, "content")
            .or_else(|| Some(dom::trimmed_text(&element)))
            .and_then(non_empty);
        debug!(author = ?result.author, "author element matched");
    }

    result
}

/// Publish date from published-time meta, `<time datetime>`, or date
/// classes.
///
/// The matched element's `datetime` attribute wins, then `content`, then
/// its text.
#[must_use]
pub fn extract_publish_date(page: &Page, original: PageMetadata) -> PageMetadata {
    let mut result = original;

    if let Some(element) = first_match(page, DATE_SELECTORS) {
        result.publish_date = dom::non_empty_attribute(&element, "datetime")
            .or_else(|| dom::non_empty_attribute(&element, "content"))
            .or_else(|| Some(dom::trimmed_text(&element)))
            .and_then(non_empty);
        debug!(publish_date = ?result.publish_date, "date element matched");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page::parse(html, "https://example.com/article").unwrap()
    }

    #[test]
    fn author_from_meta_content() {
        let page = page(
            r#"<head><meta name="author" content="Jane Doe"></head><body><span class="author">Other</span></body>"#,
        );
        assert_eq!(resolve_metadata(&page).author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn author_from_rel_link_text() {
        let page = page(r#"<p>By <a rel="author" href="/u/sam">  Sam Lee </a></p>"#);
        assert_eq!(resolve_metadata(&page).author.as_deref(), Some("Sam Lee"));
    }

    #[test]
    fn byline_class_is_last_resort() {
        let page = page(r#"<div class="byline">Reporter Name</div>"#);
        assert_eq!(resolve_metadata(&page).author.as_deref(), Some("Reporter Name"));
    }

    #[test]
    fn empty_author_element_leaves_field_unset() {
        let page = page(r#"<span class="author">   </span><div class="byline">Later</div>"#);
        assert!(resolve_metadata(&page).author.is_none());
    }

    #[test]
    fn date_prefers_published_time_meta() {
        let page = page(
            r#"<head><meta property="article:published_time" content="2024-03-01T10:00:00Z"></head>
               <body><time datetime="2023-01-01">Jan 1</time></body>"#,
        );
        assert_eq!(
            resolve_metadata(&page).publish_date.as_deref(),
            Some("2024-03-01T10:00:00Z")
        );
    }

    #[test]
    fn date_from_time_datetime_attribute() {
        let page = page(r#"<time datetime="2023-05-06">May 6, 2023</time>"#);
        assert_eq!(resolve_metadata(&page).publish_date.as_deref(), Some("2023-05-06"));
    }

    #[test]
    fn date_from_class_text() {
        let page = page(r#"<span class="date"> 12 June 2022 </span>"#);
        assert_eq!(resolve_metadata(&page).publish_date.as_deref(), Some("12 June 2022"));
    }

    #[test]
    fn missing_fields_are_none() {
        let metadata = resolve_metadata(&page("<p>Nothing to see.</p>"));
        assert!(metadata.author.is_none());
        assert!(metadata.publish_date.is_none());
    }
}
