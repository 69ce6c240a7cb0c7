//! Text normalization applied to every extracted summary.

use crate::patterns::{CITATION_MARKER, EDIT_ASIDE, WHITESPACE_RUN};

/// Maximum length of a normalized summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 400;

/// Appended when a summary was cut at [`MAX_SUMMARY_CHARS`].
pub const ELLIPSIS: &str = "...";

/// Clean extracted text for display.
///
/// Removes bracketed citation markers and parenthetical "edit" asides,
/// collapses whitespace runs to single spaces, trims, and truncates to
/// [`MAX_SUMMARY_CHARS`] characters. The ellipsis is appended only when the
/// cleaned text was longer than the limit.
///
/// ```
/// use pagebrief::normalize_text;
///
/// assert_eq!(normalize_text("Hello [1] world (see edit) "), "Hello world");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let without_citations = CITATION_MARKER.replace_all(text, "");
    let without_asides = EDIT_ASIDE.replace_all(&without_citations, "");
    let collapsed = WHITESPACE_RUN.replace_all(&without_asides, " ");
    let cleaned = collapsed.trim();

    if cleaned.chars().count() > MAX_SUMMARY_CHARS {
        let mut truncated: String = cleaned.chars().take(MAX_SUMMARY_CHARS).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        cleaned.to_string()
    }
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
