//! Webhook delivery of extraction results.
//!
//! [`Notifier`] is the seam between extraction and transport; the bundled
//! backend posts a Block Kit message to a Slack incoming webhook.

use async_trait::async_trait;
use chrono::Local;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::result::ExtractionResult;

/// Plain-text fallback shown in notifications.
pub const MESSAGE_TEXT: &str = "📄 *Page Data Extracted*";

/// Pluggable delivery backend.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one extraction result.
    async fn deliver(&self, result: &ExtractionResult) -> Result<()>;
}

/// Slack incoming webhook backend.
pub struct SlackWebhook {
    webhook_url: String,
    http: reqwest::Client,
}

impl SlackWebhook {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self::with_client(webhook_url, reqwest::Client::new())
    }

    /// Use a preconfigured client, e.g. one with a timeout.
    pub fn with_client(webhook_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            http,
        }
    }

    /// Block Kit payload for a result.
    #[must_use]
    pub fn build_message(result: &ExtractionResult) -> Value {
        let mut blocks = vec![
            json!({
                "type": "header",
                "text": { "type": "plain_text", "text": "📄 Page Data Extracted" },
            }),
            json!({
                "type": "section",
                "fields": [
                    { "type": "mrkdwn", "text": format!("🔹 *Title:*\n{}", result.title) },
                    { "type": "mrkdwn", "text": format!("🔹 *URL:*\n<{}|View Page>", result.url) },
                ],
            }),
            json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": format!("🔹 *Summary:*\n{}", result.summary) },
            }),
        ];

        if let Some(author) = &result.author {
            blocks.push(json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": format!("👤 *Author:* {author}") },
            }));
        }

        let extracted_on = Local::now().format("%Y-%m-%d %H:%M:%S");
        blocks.push(json!({
            "type": "context",
            "elements": [
                { "type": "mrkdwn", "text": format!("Extracted on {extracted_on} • pagebrief") },
            ],
        }));

        json!({
            "text": MESSAGE_TEXT,
            "blocks": blocks,
        })
    }

    async fn post(&self, payload: &Value) -> Result<()> {
        let resp = self.http.post(&self.webhook_url).json(payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "webhook returned non-success");
            return Err(Error::Delivery {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for SlackWebhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The URL is a bearer secret.
        f.debug_struct("SlackWebhook").finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for SlackWebhook {
    async fn deliver(&self, result: &ExtractionResult) -> Result<()> {
        let payload = Self::build_message(result);
        self.post(&payload).await?;
        info!(url = %result.url, "extraction delivered");
        Ok(())
    }
}
