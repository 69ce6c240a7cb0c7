//! Configuration options.
//!
//! The `Options` struct carries the delivery and highlighting settings.
//! Extraction itself has no knobs: its thresholds are fixed constants.

use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};
use crate::highlight::DEFAULT_HIGHLIGHT_DURATION;

/// Webhook URLs must start with this prefix.
pub const WEBHOOK_PREFIX: &str = "https://hooks.slack.com/";

/// Webhook URLs must be longer than this many characters.
pub const MIN_WEBHOOK_LEN: usize = 50;

/// Environment variable holding the webhook URL.
pub const ENV_WEBHOOK_URL: &str = "PAGEBRIEF_WEBHOOK_URL";

/// Environment variable holding the highlight window in milliseconds.
pub const ENV_HIGHLIGHT_MS: &str = "PAGEBRIEF_HIGHLIGHT_MS";

/// Environment variable toggling highlight after delivery.
pub const ENV_AUTO_HIGHLIGHT: &str = "PAGEBRIEF_AUTO_HIGHLIGHT";

/// Configuration options.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pagebrief::Options;
///
/// let options = Options {
///     highlight_duration: Duration::from_secs(2),
///     ..Options::default()
/// };
/// assert!(options.auto_highlight);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Incoming webhook the extraction is posted to.
    ///
    /// Default: `None`
    pub webhook_url: Option<String>,

    /// How long highlight markers stay on the page.
    ///
    /// Default: 5 seconds
    pub highlight_duration: Duration,

    /// Highlight the extracted elements after a successful delivery.
    ///
    /// Default: `true`
    pub auto_highlight: bool,

    /// Timeout for fetching a page and for webhook delivery.
    ///
    /// Default: 15 seconds
    pub fetch_timeout: Duration,

    /// User agent sent when fetching pages.
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            webhook_url: None,
            highlight_duration: DEFAULT_HIGHLIGHT_DURATION,
            auto_highlight: true,
            fetch_timeout: Duration::from_secs(15),
            user_agent: concat!("pagebrief/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Options {
    /// Defaults overridden by `PAGEBRIEF_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    ///
    /// Values that do not parse keep the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();

        if let Some(url) = lookup(ENV_WEBHOOK_URL).filter(|v| !v.trim().is_empty()) {
            options.webhook_url = Some(url.trim().to_string());
        }

        if let Some(raw) = lookup(ENV_HIGHLIGHT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => options.highlight_duration = Duration::from_millis(ms),
                Err(e) => warn!(value = %raw, error = %e, "ignoring {ENV_HIGHLIGHT_MS}"),
            }
        }

        if let Some(raw) = lookup(ENV_AUTO_HIGHLIGHT) {
            match parse_flag(&raw) {
                Some(flag) => options.auto_highlight = flag,
                None => warn!(value = %raw, "ignoring {ENV_AUTO_HIGHLIGHT}"),
            }
        }

        options
    }

    /// The configured webhook URL, validated.
    ///
    /// # Errors
    ///
    /// See [`validate_webhook_url`].
    pub fn webhook(&self) -> Result<&str> {
        validate_webhook_url(self.webhook_url.as_deref().unwrap_or_default())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Check a webhook URL before anything is extracted.
///
/// # Errors
///
/// [`Error::MissingWebhook`] for an empty value, [`Error::InvalidWebhook`]
/// when the prefix or length check fails.
pub fn validate_webhook_url(url: &str) -> Result<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::MissingWebhook);
    }
    if !url.starts_with(WEBHOOK_PREFIX) || url.chars().count() <= MIN_WEBHOOK_LEN {
        return Err(Error::InvalidWebhook(url.to_string()));
    }
    Ok(url)
}
