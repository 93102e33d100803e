//! streamgate - catalog scraper and stream URL resolver for vidorra.to.
//!
//! Scrapes the site's video catalog into JSON and resolves direct CDN
//! stream URLs by replaying the site's own csrf token and session cookie
//! dance.

mod cli;
mod config;
mod models;
mod scrape;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "streamgate=debug"
    } else {
        "streamgate=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run().await
}
