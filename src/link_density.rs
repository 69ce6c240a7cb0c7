//! Link density measurement for paragraph candidates.
//!
//! A block whose text is mostly anchor text is navigation, not prose.

use dom_query::Selection;

/// Link text above this share of the block text marks the block as links.
pub const MAX_LINK_DENSITY: f64 = 0.5;

/// Total character count of all descendant link texts.
///
/// Link text is counted untrimmed, the same way the block text of a link
/// contributes to its parent.
#[must_use]
pub fn link_text_length(element: &Selection) -> usize {
    element
        .select("a")
        .iter()
        .map(|link| link.text().chars().count())
        .sum()
}

/// Share of `text_length` that is link text. Zero for empty text.
#[must_use]
pub fn link_density(link_length: usize, text_length: usize) -> f64 {
    if text_length == 0 {
        return 0.0;
    }
    link_length as f64 / text_length as f64
}

/// Whether the link share exceeds [`MAX_LINK_DENSITY`].
#[must_use]
pub fn is_link_heavy(link_length: usize, text_length: usize) -> bool {
    link_density(link_length, text_length) > MAX_LINK_DENSITY
}
