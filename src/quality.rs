//! Paragraph quality filter.
//!
//! Decides whether a block of text is real prose or page chrome. The same
//! predicate backs the text path and the highlight path.

use dom_query::Selection;

use crate::dom;
use crate::link_density::{is_link_heavy, link_text_length};
use crate::patterns::{BOILERPLATE_KEYWORDS, COPYRIGHT_PREFIX};

/// Shortest acceptable paragraph, in characters.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// Longest acceptable paragraph, in characters.
pub const MAX_PARAGRAPH_CHARS: usize = 800;

/// What the filter needs to know about where a paragraph sits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphContext {
    /// Parent class list and id, lowercased.
    pub parent: String,
    /// Character count of all link text inside the paragraph.
    pub link_text_length: usize,
}

impl ParagraphContext {
    /// Gather the context of a paragraph element.
    #[must_use]
    pub fn of(element: &Selection) -> Self {
        Self {
            parent: dom::parent_context(element),
            link_text_length: link_text_length(element),
        }
    }
}

/// Whether `text` (already trimmed) is an acceptable summary paragraph.
#[must_use]
pub fn is_acceptable(text: &str, context: &ParagraphContext) -> bool {
    let length = text.chars().count();
    if !(MIN_PARAGRAPH_CHARS..=MAX_PARAGRAPH_CHARS).contains(&length) {
        return false;
    }

    let parent = context.parent.to_lowercase();
    if BOILERPLATE_KEYWORDS.iter().any(|keyword| parent.contains(keyword)) {
        return false;
    }

    if is_link_heavy(context.link_text_length, length) {
        return false;
    }

    !COPYRIGHT_PREFIX.is_match(text)
}

/// Quality check for a paragraph element, returning its trimmed text when
/// it passes.
#[must_use]
pub fn acceptable_text(element: &Selection) -> Option<String> {
    let text = dom::trimmed_text(element);
    is_acceptable(&text, &ParagraphContext::of(element)).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prose(len: usize) -> String {
        "The quick brown fox jumps over the lazy dog. "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }

    fn clean() -> ParagraphContext {
        ParagraphContext {
            parent: "entry-content ".to_string(),
            link_text_length: 0,
        }
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(!is_acceptable(&prose(49), &clean()));
        assert!(is_acceptable(&prose(50), &clean()));
        assert!(is_acceptable(&prose(800), &clean()));
        assert!(!is_acceptable(&prose(801), &clean()));
    }

    #[test]
    fn every_boilerplate_keyword_rejects() {
        for keyword in BOILERPLATE_KEYWORDS {
            let context = ParagraphContext {
                parent: format!("wrapper {keyword}x main"),
                link_text_length: 0,
            };
            assert!(!is_acceptable(&prose(200), &context), "{keyword} should reject");
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let context = ParagraphContext {
            parent: "Site-FOOTER".to_string(),
            link_text_length: 0,
        };
        assert!(!is_acceptable(&prose(200), &context));
    }

    #[test]
    fn link_heavy_paragraph_rejected() {
        let context = ParagraphContext {
            parent: String::new(),
            link_text_length: 101,
        };
        assert!(!is_acceptable(&prose(200), &context));

        let context = ParagraphContext {
            parent: String::new(),
            link_text_length: 100,
        };
        assert!(is_acceptable(&prose(200), &context));
    }

    #[test]
    fn copyright_and_year_openers_rejected() {
        let tail = prose(100);
        assert!(!is_acceptable(&format!("Copyright {tail}"), &clean()));
        assert!(!is_acceptable(&format!("© {tail}"), &clean()));
        assert!(!is_acceptable(&format!("All Rights Reserved {tail}"), &clean()));
        assert!(!is_acceptable(&format!("2023 {tail}"), &clean()));
        assert!(is_acceptable(&format!("In 2023 {tail}"), &clean()));
    }

    #[test]
    fn element_context_is_read_from_parent() {
        let text = prose(120);
        let html = format!(
            r#"<div class="sidebar"><p id="a">{text}</p></div><div class="post"><p id="b">{text}</p></div>"#
        );
        let doc = dom::parse(&html);

        assert!(acceptable_text(&doc.select("#a")).is_none());
        assert_eq!(acceptable_text(&doc.select("#b")), Some(text.trim().to_string()));
    }
}
