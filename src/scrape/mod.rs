//! Upstream scraping: the catalog listing plus the session dance that turns
//! a video ID into a direct stream URL.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod resolver;
pub mod site;

pub use catalog::fetch_catalog;
pub use error::ResolveError;
pub use resolver::{SessionArtifacts, StreamResolver};
pub use site::SiteEndpoints;

use std::time::Duration;

use reqwest::Client;

/// Build the shared upstream HTTP client.
///
/// One client serves both the catalog scrape and resolutions; the timeout
/// bounds every pipeline step.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .user_agent(site::USER_AGENT)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to create HTTP client")
}
