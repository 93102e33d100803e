//! Catalog page scraping.

use reqwest::Client;

use super::extract;
use super::site::{self, SiteEndpoints};
use crate::models::CatalogEntry;

/// Fetch and parse the catalog listing.
///
/// Failures are logged and produce an empty list; callers always get a
/// renderable (possibly empty) catalog and never an error.
pub async fn fetch_catalog(client: &Client, endpoints: &SiteEndpoints) -> Vec<CatalogEntry> {
    let url = endpoints.catalog_url();

    let response = match client.get(&url).headers(site::page_headers()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("catalog fetch failed: {}", e);
            return Vec::new();
        }
    };

    if !response.status().is_success() {
        tracing::warn!("catalog fetch returned status {}", response.status());
        return Vec::new();
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("catalog body read failed: {}", e);
            return Vec::new();
        }
    };

    let entries = extract::catalog(&body);
    tracing::info!("catalog scrape found {} videos", entries.len());
    entries
}
