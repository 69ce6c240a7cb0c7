//! Transient highlight markers.
//!
//! Marks the title and summary elements with classes the UI layer styles,
//! and removes them again once the highlight window has passed. Clearing is
//! idempotent, so a new highlight simply clears whatever is left first.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::dom;
use crate::page::Page;
use crate::result::{ElementRef, HighlightSelection};

/// Class carried by every highlighted element.
pub const HIGHLIGHT_CLASS: &str = "pagebrief-highlight";

/// Role class for the title element.
pub const TITLE_CLASS: &str = "pagebrief-highlight-title";

/// Role class for the paragraph element.
pub const PARAGRAPH_CLASS: &str = "pagebrief-highlight-paragraph";

/// Attribute asking the UI layer for a pulse effect.
pub const PULSE_ATTRIBUTE: &str = "data-pagebrief-pulse";

/// Number of pulses requested.
pub const PULSE_REPETITIONS: u32 = 3;

/// Default highlight window.
pub const DEFAULT_HIGHLIGHT_DURATION: Duration = Duration::from_secs(5);

/// Pending removal of the current markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightLease {
    pub expires_at: Instant,
}

impl HighlightLease {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Clear the markers if the window has passed. Returns whether it did.
    pub fn clear_if_expired(&self, page: &Page, now: Instant) -> bool {
        if self.is_expired(now) {
            clear_highlights(page);
            true
        } else {
            false
        }
    }
}

fn mark(element: &ElementRef<'_>, role_class: &str) {
    let sel = element.selection();
    dom::add_class(&sel, HIGHLIGHT_CLASS);
    dom::add_class(&sel, role_class);
    dom::set_attribute(&sel, PULSE_ATTRIBUTE, &PULSE_REPETITIONS.to_string());
}

/// Mark the selected elements, replacing any earlier markers.
pub fn apply_highlights(
    page: &Page,
    selection: &HighlightSelection<'_>,
    duration: Duration,
) -> HighlightLease {
    clear_highlights(page);

    if let Some(title) = &selection.title_element {
        mark(title, TITLE_CLASS);
    }
    if let Some(paragraph) = &selection.paragraph_element {
        mark(paragraph, PARAGRAPH_CLASS);
    }

    debug!(?duration, "highlights applied");
    HighlightLease {
        expires_at: Instant::now() + duration,
    }
}

/// Remove every highlight marker from the page. No-op when none are set.
pub fn clear_highlights(page: &Page) {
    for sel in page.query_all(&format!(".{HIGHLIGHT_CLASS}")) {
        dom::remove_class(&sel, HIGHLIGHT_CLASS);
        dom::remove_class(&sel, TITLE_CLASS);
        dom::remove_class(&sel, PARAGRAPH_CLASS);
        dom::remove_attribute(&sel, PULSE_ATTRIBUTE);
    }
}
