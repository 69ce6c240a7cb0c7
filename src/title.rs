//! Title resolution.
//!
//! Probes an ordered list of title locations and keeps the first value that
//! looks like a title: page headings first, then social card tags, then the
//! `<title>` element with its site-name suffix removed.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::normalize::collapse_whitespace;
use crate::page::Page;
use crate::patterns::{
    TITLE_ELEMENT_SELECTORS, TITLE_LEADING_SEPARATOR, TITLE_META_SELECTORS, TITLE_SUFFIX,
};

/// Returned when no strategy produces a title.
pub const NO_TITLE: &str = "No title found";

/// Raw titles must be shorter than this many characters.
pub const MAX_TITLE_CHARS: usize = 300;

/// Where a title was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStrategy {
    /// Text of the first element matching a heading selector.
    Heading(&'static str),
    /// `content` attribute of a social card meta tag.
    SocialMeta(&'static str),
    /// The `<title>` element minus its trailing site name.
    DocumentTitle,
}

impl TitleStrategy {
    /// All strategies in the order they are tried.
    pub fn ordered() -> impl Iterator<Item = Self> {
        TITLE_ELEMENT_SELECTORS
            .iter()
            .copied()
            .map(Self::Heading)
            .chain(TITLE_META_SELECTORS.iter().copied().map(Self::SocialMeta))
            .chain(std::iter::once(Self::DocumentTitle))
    }

    /// Run this strategy, returning the raw value and the element it came
    /// from (headings only).
    fn probe<'a>(self, page: &'a Page) -> Option<(String, Option<Selection<'a>>)> {
        match self {
            Self::Heading(selector) => {
                let element = page.query(selector)?;
                Some((dom::trimmed_text(&element), Some(element)))
            }
            Self::SocialMeta(selector) => {
                let element = page.query(selector)?;
                let content = dom::get_attribute(&element, "content")?;
                Some((content.trim().to_string(), None))
            }
            Self::DocumentTitle => {
                let element = page.query("title")?;
                let title = dom::trimmed_text(&element);
                if title.is_empty() {
                    return None;
                }
                Some((strip_site_suffix(&title), None))
            }
        }
    }
}

/// An accepted title and where it came from.
#[derive(Debug, Clone)]
pub struct TitleCandidate<'a> {
    pub text: String,
    pub strategy: TitleStrategy,
    /// The heading element, when the title came from one.
    pub element: Option<Selection<'a>>,
}

/// Remove a trailing " - Site Name" style suffix.
///
/// ```
/// use pagebrief::title::strip_site_suffix;
///
/// assert_eq!(strip_site_suffix("Article Headline - Example Site"), "Article Headline");
/// ```
#[must_use]
pub fn strip_site_suffix(title: &str) -> String {
    TITLE_SUFFIX.replace(title, "").trim().to_string()
}

/// Accept and clean a raw strategy value.
///
/// The raw value must be non-empty and shorter than [`MAX_TITLE_CHARS`];
/// the cleaned value must still be non-empty.
#[must_use]
pub fn accept_title(raw: &str) -> Option<String> {
    let length = raw.chars().count();
    if length == 0 || length >= MAX_TITLE_CHARS {
        return None;
    }
    let collapsed = collapse_whitespace(raw);
    let cleaned = TITLE_LEADING_SEPARATOR.replace(&collapsed, "").trim().to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// First acceptable title candidate, if any strategy yields one.
#[must_use]
pub fn title_candidate(page: &Page) -> Option<TitleCandidate<'_>> {
    TitleStrategy::ordered().find_map(|strategy| {
        let (raw, element) = strategy.probe(page)?;
        let text = accept_title(&raw)?;
        debug!(?strategy, title = %text, "title resolved");
        Some(TitleCandidate {
            text,
            strategy,
            element,
        })
    })
}

/// Resolve the page title, falling back to [`NO_TITLE`].
#[must_use]
pub fn resolve_title(page: &Page) -> String {
    title_candidate(page).map_or_else(|| NO_TITLE.to_string(), |candidate| candidate.text)
}

/// The heading element the resolved title was read from.
#[must_use]
pub fn title_element(page: &Page) -> Option<Selection<'_>> {
    title_candidate(page).and_then(|candidate| candidate.element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page::parse(html, "https://example.com/post").unwrap()
    }

    #[test]
    fn strategy_order_is_headings_meta_title() {
        let order: Vec<_> = TitleStrategy::ordered().collect();

        assert_eq!(order.first(), Some(&TitleStrategy::Heading(".mw-page-title-main")));
        assert_eq!(order.last(), Some(&TitleStrategy::DocumentTitle));
        assert_eq!(
            order.len(),
            TITLE_ELEMENT_SELECTORS.len() + TITLE_META_SELECTORS.len() + 1
        );
    }

    #[test]
    fn encyclopedic_heading_wins_over_h1() {
        let page = page(
            r#"<h1 id="firstHeading"><span class="mw-page-title-main">London</span></h1>"#,
        );
        let candidate = title_candidate(&page).unwrap();

        assert_eq!(candidate.text, "London");
        assert_eq!(candidate.strategy, TitleStrategy::Heading(".mw-page-title-main"));
        assert!(candidate.element.is_some());
    }

    #[test]
    fn strips_site_suffix_from_title_element() {
        let page = page("<html><head><title>Article Headline - Example Site</title></head></html>");
        assert_eq!(resolve_title(&page), "Article Headline");
    }

    #[test]
    fn suffix_separators() {
        assert_eq!(strip_site_suffix("Headline | Site"), "Headline");
        assert_eq!(strip_site_suffix("Headline – Site"), "Headline");
        assert_eq!(strip_site_suffix("Headline — Site"), "Headline");
        assert_eq!(strip_site_suffix("Plain Headline"), "Plain Headline");
    }

    #[test]
    fn og_title_used_before_document_title() {
        let page = page(
            r#"<head><meta property="og:title" content=" OG  Title "><title>Doc - Site</title></head>"#,
        );
        let candidate = title_candidate(&page).unwrap();

        assert_eq!(candidate.text, "OG Title");
        assert!(candidate.element.is_none());
    }

    #[test]
    fn empty_heading_falls_through() {
        let page = page(r#"<h1>   </h1><h2 class="entry-title">Entry</h2>"#);
        assert_eq!(resolve_title(&page), "Entry");
    }

    #[test]
    fn overlong_heading_rejected() {
        let long = "x".repeat(MAX_TITLE_CHARS);
        let page = page(&format!("<h1>{long}</h1><title>Short</title>"));
        assert_eq!(resolve_title(&page), "Short");
    }

    #[test]
    fn leading_separator_artifact_removed() {
        assert_eq!(accept_title("| Breaking\n  News"), Some("Breaking News".to_string()));
        assert_eq!(accept_title(" — "), None);
        assert_eq!(accept_title(""), None);
    }

    #[test]
    fn sentinel_when_nothing_matches() {
        let page = page("<body><p>No headings here.</p></body>");
        assert_eq!(resolve_title(&page), NO_TITLE);
        assert!(title_element(&page).is_none());
    }

    #[test]
    fn title_element_only_for_heading_strategies() {
        let page = page("<head><title>Only Title</title></head>");
        assert_eq!(resolve_title(&page), "Only Title");
        assert!(title_element(&page).is_none());
    }
}
