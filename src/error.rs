//! Error types for pagebrief.
//!
//! Extraction itself never fails: missing content is reported in-band with
//! sentinel values. The variants here cover page input, configuration and
//! webhook delivery.

/// Error type for pagebrief operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL could not be parsed as an absolute URL.
    #[error("invalid page URL: {0}")]
    InvalidUrl(String),

    /// No title and no summary could be extracted from the page.
    #[error("no meaningful data")]
    NoContent,

    /// No webhook URL was configured.
    #[error("webhook URL is not configured")]
    MissingWebhook,

    /// The configured webhook URL failed validation.
    #[error("invalid webhook URL: {0}")]
    InvalidWebhook(String),

    /// The webhook answered with a non-success status.
    #[error("webhook error: {status} {reason}")]
    Delivery {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// Fetching the page answered with a non-success status.
    #[error("page fetch failed with status {status}")]
    Fetch {
        /// HTTP status code.
        status: u16,
    },

    /// Network-level failure talking to the webhook or the page host.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for pagebrief operations.
pub type Result<T> = std::result::Result<T, Error>;
