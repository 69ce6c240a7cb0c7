//! # pagebrief
//!
//! Heuristic title and summary extraction from web pages.
//!
//! Given a parsed page, pagebrief locates a human-readable title and one
//! representative body paragraph using ordered, selector-driven strategies
//! tuned for encyclopedic, blog, news and generic layouts. Results can be
//! posted to a webhook, and the elements they came from can be marked for
//! transient highlighting.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagebrief::extract_html;
//!
//! let html = r#"<html><head><title>My Article - Example</title></head>
//! <body><h1 class="entry-title">My Article</h1><div class="entry-content">
//! <p>This opening paragraph is long enough to be picked as the summary of the page.</p>
//! </div></body></html>"#;
//!
//! let result = extract_html(html, "https://blog.example.com/my-article")?;
//! assert_eq!(result.title, "My Article");
//! assert!(result.summary.starts_with("This opening paragraph"));
//! # Ok::<(), pagebrief::Error>(())
//! ```
//!
//! Extraction never fails on odd markup: when nothing is found, `title` and
//! `summary` hold the [`NO_TITLE`] and [`NO_SUMMARY`] sentinels.

mod error;
mod extract;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Parsed page with URL and document-order index.
pub mod page;

/// Compiled regexes and selector lists.
pub mod patterns;

/// Whitespace, citation and length normalization.
pub mod normalize;

/// Link density testing for boilerplate detection.
pub mod link_density;

/// Paragraph quality predicate.
pub mod quality;

/// Title strategies.
pub mod title;

/// Site-aware summary strategies.
pub mod summary;

/// Author and publish date.
pub mod metadata;

/// Highlight markers and their lifecycle.
pub mod highlight;

/// Configuration.
pub mod options;

/// Webhook delivery.
pub mod webhook;

// Public API - re-exports
pub use error::{Error, Result};
pub use highlight::{apply_highlights, clear_highlights, HighlightLease};
pub use normalize::normalize_text;
pub use options::{validate_webhook_url, Options};
pub use page::Page;
pub use result::{ElementRef, ExtractionResult, HighlightSelection, PageMetadata};
pub use summary::{SiteKind, NO_SUMMARY};
pub use title::NO_TITLE;
pub use webhook::{Notifier, SlackWebhook};

/// Extract title, summary and metadata from a page.
///
/// Infallible: individual strategy failures fall through to the next
/// strategy and finally to the sentinels.
#[must_use]
pub fn extract(page: &Page) -> ExtractionResult {
    extract::extract_page(page)
}

/// Like [`extract`], but treats a page with neither title nor summary as
/// an error.
///
/// # Errors
///
/// Returns [`Error::NoContent`] when both fields are sentinels.
pub fn try_extract(page: &Page) -> Result<ExtractionResult> {
    extract::try_extract_page(page)
}

/// Parse `html` as the page at `url` and extract it.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when `url` is not absolute.
pub fn extract_html(html: &str, url: &str) -> Result<ExtractionResult> {
    let page = Page::parse(html, url)?;
    Ok(extract(&page))
}

/// Elements behind what [`extract`] would return, for highlighting.
///
/// Does not mutate the page; pass the selection to [`apply_highlights`].
#[must_use]
pub fn resolve_highlight_targets(page: &Page) -> HighlightSelection<'_> {
    extract::highlight_targets(page)
}

/// Fetch a page over HTTP and decode it.
///
/// # Errors
///
/// [`Error::Fetch`] for a non-success status, [`Error::Transport`] for
/// network failures, [`Error::InvalidUrl`] for a relative URL.
pub async fn fetch_page(url: &str, options: &Options) -> Result<Page> {
    let client = reqwest::Client::builder()
        .timeout(options.fetch_timeout)
        .user_agent(options.user_agent.as_str())
        .build()?;

    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            status: status.as_u16(),
        });
    }

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    // Redirects may have moved us; report the final location.
    let final_url = resp.url().to_string();
    let bytes = resp.bytes().await?;

    tracing::debug!(url = %final_url, bytes = bytes.len(), "page fetched");
    Page::from_bytes(&bytes, content_type.as_deref(), &final_url)
}
