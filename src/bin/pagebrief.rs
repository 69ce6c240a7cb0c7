//! Command-line front end: extract a page, preview highlights, or post the
//! extraction to a webhook.
//!
//! Logs go to stderr; stdout carries only the command output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagebrief::{
    apply_highlights, fetch_page, resolve_highlight_targets, try_extract, Notifier, Options, Page,
    SlackWebhook,
};

#[derive(Parser, Debug)]
#[command(name = "pagebrief")]
#[command(about = "Extract a page's title and summary", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the extraction as JSON.
    Extract {
        url: String,
        /// Read the page from a file instead of fetching `url`.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Fail when neither title nor summary is found.
        #[arg(long)]
        strict: bool,
    },
    /// Print the page HTML with highlight markers applied.
    Highlight {
        url: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Extract and post the result to the webhook.
    Send {
        url: String,
        #[arg(long)]
        input: Option<PathBuf>,
        /// Overrides PAGEBRIEF_WEBHOOK_URL.
        #[arg(long)]
        webhook: Option<String>,
    },
}

async fn load_page(url: &str, input: Option<&Path>, options: &Options) -> Result<Page> {
    match input {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Ok(Page::from_bytes(&bytes, None, url)?)
        }
        None => fetch_page(url, options)
            .await
            .with_context(|| format!("fetching {url}")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pagebrief=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut options = Options::from_env();

    match cli.command {
        Commands::Extract { url, input, strict } => {
            let page = load_page(&url, input.as_deref(), &options).await?;
            let result = if strict {
                try_extract(&page)?
            } else {
                pagebrief::extract(&page)
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Highlight { url, input } => {
            let page = load_page(&url, input.as_deref(), &options).await?;
            let targets = resolve_highlight_targets(&page);
            apply_highlights(&page, &targets, options.highlight_duration);
            info!(
                title = targets.title_element.is_some(),
                paragraph = targets.paragraph_element.is_some(),
                "markers applied"
            );
            println!("{}", page.html());
        }
        Commands::Send {
            url,
            input,
            webhook,
        } => {
            if webhook.is_some() {
                options.webhook_url = webhook;
            }
            // Reject a bad webhook before doing any work.
            let webhook_url = options.webhook().context("webhook configuration")?.to_string();

            let page = load_page(&url, input.as_deref(), &options).await?;
            let result = try_extract(&page)?;

            let http = reqwest::Client::builder()
                .timeout(options.fetch_timeout)
                .build()?;
            let notifier = SlackWebhook::with_client(webhook_url, http);
            notifier.deliver(&result).await.context("delivering extraction")?;
            info!(title = %result.title, "sent");

            if options.auto_highlight {
                let targets = resolve_highlight_targets(&page);
                info!(
                    title = ?targets.title_element.map(|e| e.text()),
                    paragraph = ?targets.paragraph_element.map(|e| e.text()),
                    "highlight targets"
                );
            }
        }
    }

    Ok(())
}
