//! Compiled regex patterns and selector lists for extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Selector lists are shared by the text path and the highlight path, so
//! both always probe the same elements in the same order.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace (including newlines) for collapsing.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches bracketed citation markers such as `[1]` or `[citation needed]`.
pub static CITATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("CITATION_MARKER regex"));

/// Matches parenthetical editorial asides mentioning "edit".
pub static EDIT_ASIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\([^)]*edit[^)]*\)").expect("EDIT_ASIDE regex"));

// =============================================================================
// Title Patterns
// =============================================================================

/// Matches a trailing " - Site Name" style suffix in a `<title>` value.
///
/// Leftmost match wins, so everything from the first separator onwards is
/// treated as the suffix.
pub static TITLE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*[-|–—]\s*.+)$").expect("TITLE_SUFFIX regex"));

/// Matches a leading separator artifact left over from a title prefix.
pub static TITLE_LEADING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-|–—]\s*").expect("TITLE_LEADING_SEPARATOR regex"));

// =============================================================================
// Paragraph Noise Patterns
// =============================================================================

/// Matches paragraphs opening with copyright boilerplate or a bare year.
pub static COPYRIGHT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(copyright|©|\d{4}|all rights reserved)").expect("COPYRIGHT_PREFIX regex")
});

/// Matches coordinate lines such as `51°30′N 0°7′W`.
pub static COORDINATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+°.*[NS].*[EW]").expect("COORDINATES regex"));

/// Matches a `YYYY-YYYY` style range at the start of a paragraph.
pub static YEAR_RANGE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}[-–]\d{4}").expect("YEAR_RANGE_PREFIX regex"));

/// Class/id fragments marking a paragraph's parent as page chrome.
pub const BOILERPLATE_KEYWORDS: &[&str] = &[
    "nav",
    "footer",
    "sidebar",
    "comment",
    "advertisement",
    "ad-",
    "social",
    "share",
    "related",
    "recommended",
    "cookie",
    "gdpr",
];

/// Literal substrings that mark encyclopedic page furniture.
pub const ENCYCLOPEDIC_FURNITURE: &[&str] = &["Coordinates:", "disambiguation"];

// =============================================================================
// CSS Selectors
// =============================================================================

/// Heading probes for the title, in priority order.
pub const TITLE_ELEMENT_SELECTORS: &[&str] = &[
    ".mw-page-title-main",
    "#firstHeading",
    "h1",
    "[data-testid=\"headline\"]",
    ".entry-title",
    ".post-title",
    ".article-title",
    "[role=\"heading\"][aria-level=\"1\"]",
];

/// Social card title tags, read from their `content` attribute.
pub const TITLE_META_SELECTORS: &[&str] = &[
    "meta[property=\"og:title\"]",
    "meta[name=\"twitter:title\"]",
];

/// Structured-article paragraph containers (MediaWiki layout).
pub const ENCYCLOPEDIC_SELECTORS: &[&str] = &[
    ".mw-parser-output > p:not(.mw-empty-elt)",
    "#mw-content-text p",
    ".content p",
];

/// Blog post bodies.
pub const BLOG_SELECTORS: &[&str] = &[
    ".entry-content p",
    ".post-content p",
    ".content p",
    "article p",
    ".article-body p",
    ".story-body p",
];

/// News article bodies.
pub const NEWS_SELECTORS: &[&str] = &[
    ".article-body p",
    ".story-body p",
    ".content-body p",
    "[data-module=\"ArticleBody\"] p",
    ".post-body p",
    ".entry-content p",
];

/// Generic page containers.
pub const GENERIC_SELECTORS: &[&str] = &[
    "main p",
    ".main-content p",
    "#content p",
    ".container p",
    "article p",
    ".content p",
];

/// Page description tags used when no paragraph qualifies.
pub const DESCRIPTION_META_SELECTORS: &[&str] = &[
    "meta[name=\"description\"]",
    "meta[property=\"og:description\"]",
];

/// Author probes, in priority order.
pub const AUTHOR_SELECTORS: &[&str] = &[
    "meta[name=\"author\"]",
    "[rel=\"author\"]",
    ".author",
    ".byline",
];

/// Publish date probes, in priority order.
pub const DATE_SELECTORS: &[&str] = &[
    "meta[property=\"article:published_time\"]",
    "time[datetime]",
    ".published",
    ".date",
];
