//! Extraction orchestration.
//!
//! Composes the title, summary and metadata resolvers into one
//! [`ExtractionResult`], and resolves the matching elements for
//! highlighting.

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::metadata;
use crate::page::Page;
use crate::result::{ElementRef, ExtractionResult, HighlightSelection};
use crate::summary;
use crate::title;

/// Main entry point for extraction. Never fails; missing content shows up
/// as sentinel text.
#[must_use]
pub fn extract_page(page: &Page) -> ExtractionResult {
    debug!(url = page.url(), "starting extraction");

    let title = title::resolve_title(page);
    let summary = summary::resolve_summary(page);
    let metadata = metadata::resolve_metadata(page);

    let result = ExtractionResult {
        title,
        summary,
        author: metadata.author,
        publish_date: metadata.publish_date,
        url: page.url().to_string(),
        domain: page.hostname().to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    debug!(
        title_chars = result.title.chars().count(),
        summary_chars = result.summary.chars().count(),
        has_author = result.author.is_some(),
        has_date = result.publish_date.is_some(),
        "extraction complete"
    );
    result
}

/// Like [`extract_page`], but reports a page where nothing was found.
///
/// # Errors
///
/// Returns [`Error::NoContent`] when both title and summary are sentinels.
pub fn try_extract_page(page: &Page) -> Result<ExtractionResult> {
    let result = extract_page(page);
    if result.is_meaningful() {
        Ok(result)
    } else {
        Err(Error::NoContent)
    }
}

/// Elements behind the title and summary that [`extract_page`] would
/// produce. Does not touch the page.
#[must_use]
pub fn highlight_targets(page: &Page) -> HighlightSelection<'_> {
    let selection = HighlightSelection {
        title_element: title::title_element(page)
            .as_ref()
            .and_then(ElementRef::from_selection),
        paragraph_element: summary::summary_element(page)
            .as_ref()
            .and_then(ElementRef::from_selection),
    };
    debug!(
        title = selection.title_element.is_some(),
        paragraph = selection.paragraph_element.is_some(),
        "highlight targets resolved"
    );
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::NO_SUMMARY;
    use crate::title::NO_TITLE;

    const LEAD: &str = "The council approved the new transit plan on Tuesday after a long \
        debate over funding and the timeline for construction.";

    fn article() -> Page {
        let html = format!(
            r#"<html><head><title>Transit Plan Approved - City News</title>
               <meta name="author" content="A. Writer"></head>
               <body><h1 class="article-title">Transit Plan Approved</h1>
               <div class="article-body"><p id="lead">{LEAD}</p></div></body></html>"#
        );
        Page::parse(&html, "https://news.example.com/transit").unwrap()
    }

    #[test]
    fn composes_all_resolvers() {
        let result = extract_page(&article());

        assert_eq!(result.title, "Transit Plan Approved");
        assert_eq!(result.summary, LEAD);
        assert_eq!(result.author.as_deref(), Some("A. Writer"));
        assert!(result.publish_date.is_none());
        assert_eq!(result.url, "https://news.example.com/transit");
        assert_eq!(result.domain, "news.example.com");
    }

    #[test]
    fn timestamp_is_iso8601_utc() {
        let result = extract_page(&article());

        assert!(result.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }

    #[test]
    fn empty_page_yields_sentinels() {
        let page = Page::parse("", "https://example.com/").unwrap();
        let result = extract_page(&page);

        assert_eq!(result.title, NO_TITLE);
        assert_eq!(result.summary, NO_SUMMARY);
        assert!(matches!(try_extract_page(&page), Err(Error::NoContent)));
    }

    #[test]
    fn highlight_targets_match_extracted_text() {
        let page = article();
        let result = extract_page(&page);
        let targets = highlight_targets(&page);

        assert_eq!(targets.title_element.map(|e| e.text()), Some(result.title));
        assert_eq!(targets.paragraph_element.map(|e| e.text()), Some(result.summary));
    }

    #[test]
    fn highlight_targets_are_idempotent() {
        let page = article();
        assert_eq!(highlight_targets(&page), highlight_targets(&page));
    }
}
