//! Site-aware summary resolution.
//!
//! Each site category owns an ordered selector list. Within a category the
//! first selector that yields an acceptable paragraph wins, and the top-most
//! of its paragraphs is taken. Categories are tried in order; when none
//! produces a paragraph the page's meta description is used.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::normalize::normalize_text;
use crate::page::Page;
use crate::patterns::{
    BLOG_SELECTORS, COORDINATES, DESCRIPTION_META_SELECTORS, ENCYCLOPEDIC_FURNITURE,
    ENCYCLOPEDIC_SELECTORS, GENERIC_SELECTORS, NEWS_SELECTORS, YEAR_RANGE_PREFIX,
};
use crate::quality;

/// Returned when neither a paragraph nor a description qualifies.
pub const NO_SUMMARY: &str = "No meaningful content found";

/// Exclusive character band every category result must fall in.
pub const STRATEGY_BAND: (usize, usize) = (30, 800);

/// Exclusive character band the encyclopedic category applies first.
pub const ENCYCLOPEDIC_BAND: (usize, usize) = (50, 600);

/// Year-range openers shorter than this are treated as timeline entries.
const YEAR_RANGE_MAX_CHARS: usize = 100;

/// Meta descriptions must be longer than this to be used.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

fn within(length: usize, (low, high): (usize, usize)) -> bool {
    length > low && length < high
}

/// A family of page layouts with its own paragraph containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStrategy {
    Encyclopedic,
    Blog,
    News,
    Generic,
}

/// Default category order.
pub const SUMMARY_STRATEGIES: &[SiteStrategy] = &[
    SiteStrategy::Encyclopedic,
    SiteStrategy::Blog,
    SiteStrategy::News,
    SiteStrategy::Generic,
];

impl SiteStrategy {
    #[must_use]
    pub fn selectors(self) -> &'static [&'static str] {
        match self {
            Self::Encyclopedic => ENCYCLOPEDIC_SELECTORS,
            Self::Blog => BLOG_SELECTORS,
            Self::News => NEWS_SELECTORS,
            Self::Generic => GENERIC_SELECTORS,
        }
    }

    /// Category-specific filter applied on top of the quality filter.
    #[must_use]
    pub fn admits(self, text: &str) -> bool {
        match self {
            Self::Encyclopedic => !is_encyclopedic_furniture(text),
            Self::Blog | Self::News | Self::Generic => true,
        }
    }

    /// Best paragraph for this category, before the outer length band.
    #[must_use]
    pub fn best_paragraph(self, page: &Page) -> Option<ParagraphCandidate<'_>> {
        find_best_paragraph(page, self.selectors(), |text| self.admits(text))
    }
}

/// Coordinates, disambiguation notes, timeline stubs and anything outside
/// the encyclopedic length band.
#[must_use]
pub fn is_encyclopedic_furniture(text: &str) -> bool {
    let length = text.chars().count();
    ENCYCLOPEDIC_FURNITURE.iter().any(|marker| text.contains(marker))
        || COORDINATES.is_match(text)
        || (YEAR_RANGE_PREFIX.is_match(text) && length < YEAR_RANGE_MAX_CHARS)
        || !within(length, ENCYCLOPEDIC_BAND)
}

/// Coarse site classification by hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Encyclopedic,
    Generic,
}

impl SiteKind {
    #[must_use]
    pub fn classify(hostname: &str) -> Self {
        if hostname.to_lowercase().contains("wikipedia") {
            Self::Encyclopedic
        } else {
            Self::Generic
        }
    }

    /// Category order for this kind of site. Both the text path and the
    /// highlight path read it, so they always agree.
    #[must_use]
    pub fn strategy_order(self) -> &'static [SiteStrategy] {
        match self {
            Self::Encyclopedic | Self::Generic => SUMMARY_STRATEGIES,
        }
    }
}

/// A paragraph that passed the filters.
#[derive(Debug, Clone)]
pub struct ParagraphCandidate<'a> {
    /// Trimmed paragraph text.
    pub text: String,
    pub element: Selection<'a>,
    /// Rank from the top of the page.
    pub vertical_position: usize,
}

/// Top-most acceptable paragraph of the first selector that has one.
///
/// Later selectors are not consulted once an earlier selector produced a
/// candidate, even if their candidates sit higher on the page.
pub fn find_best_paragraph<'a>(
    page: &'a Page,
    selectors: &[&str],
    admits: impl Fn(&str) -> bool,
) -> Option<ParagraphCandidate<'a>> {
    selectors.iter().find_map(|selector| {
        let mut candidates: Vec<ParagraphCandidate<'a>> = page
            .query_all(selector)
            .into_iter()
            .filter_map(|element| {
                let text = quality::acceptable_text(&element)?;
                if !admits(&text) {
                    return None;
                }
                let vertical_position = page.vertical_position(&element);
                Some(ParagraphCandidate {
                    text,
                    element,
                    vertical_position,
                })
            })
            .collect();

        candidates.sort_by_key(|candidate| candidate.vertical_position);
        candidates.into_iter().next()
    })
}

/// The accepted summary and its origin.
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    /// Normalized summary text.
    pub text: String,
    /// Category that produced it; `None` for the meta description.
    pub strategy: Option<SiteStrategy>,
    /// Paragraph element; `None` for the meta description.
    pub element: Option<Selection<'a>>,
}

/// First category paragraph inside [`STRATEGY_BAND`].
#[must_use]
pub fn paragraph_summary(page: &Page) -> Option<Summary<'_>> {
    let kind = SiteKind::classify(page.hostname());
    kind.strategy_order().iter().find_map(|&strategy| {
        let candidate = strategy.best_paragraph(page)?;
        if !within(candidate.text.chars().count(), STRATEGY_BAND) {
            debug!(?strategy, "paragraph outside length band, trying next category");
            return None;
        }
        debug!(?kind, ?strategy, position = candidate.vertical_position, "summary paragraph found");
        Some(Summary {
            text: normalize_text(&candidate.text),
            strategy: Some(strategy),
            element: Some(candidate.element),
        })
    })
}

/// Page description from meta tags, if long enough.
#[must_use]
pub fn description_summary(page: &Page) -> Option<Summary<'static>> {
    let description = DESCRIPTION_META_SELECTORS.iter().find_map(|selector| {
        let element = page.query(selector)?;
        let content = dom::get_attribute(&element, "content")?;
        let content = content.trim();
        (!content.is_empty()).then(|| content.to_string())
    })?;

    if description.chars().count() <= MIN_DESCRIPTION_CHARS {
        return None;
    }
    debug!("summary taken from meta description");
    Some(Summary {
        text: normalize_text(&description),
        strategy: None,
        element: None,
    })
}

/// Summary candidate: paragraph strategies first, then meta description.
#[must_use]
pub fn summary_candidate(page: &Page) -> Option<Summary<'_>> {
    paragraph_summary(page).or_else(|| description_summary(page))
}

/// Resolve the page summary, falling back to [`NO_SUMMARY`].
#[must_use]
pub fn resolve_summary(page: &Page) -> String {
    summary_candidate(page).map_or_else(|| NO_SUMMARY.to_string(), |summary| summary.text)
}

/// The paragraph element the resolved summary was read from.
#[must_use]
pub fn summary_element(page: &Page) -> Option<Selection<'_>> {
    paragraph_summary(page).and_then(|summary| summary.element)
}
