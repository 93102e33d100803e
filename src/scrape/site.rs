//! Upstream endpoints and the browser header sets sent to them.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use url::Url;

/// Fixed browser user agent (Chrome on Windows) for all upstream requests.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const SITE_BASE: &str = "https://vidorra.to";
const CDN_RESOLVE_URL: &str = "https://cdn.vidorra.to/api/videofile";

/// Upstream endpoints. `Default` is the live site; tests point both URLs at
/// local stub servers.
#[derive(Debug, Clone)]
pub struct SiteEndpoints {
    /// Site base URL, no trailing slash.
    pub base: String,
    /// CDN resolve endpoint receiving the multipart form.
    pub cdn: String,
}

impl Default for SiteEndpoints {
    fn default() -> Self {
        Self {
            base: SITE_BASE.to_string(),
            cdn: CDN_RESOLVE_URL.to_string(),
        }
    }
}

impl SiteEndpoints {
    /// Catalog listing page.
    pub fn catalog_url(&self) -> String {
        format!("{}/videos/", self.base)
    }

    /// Video detail page for a catalog ID.
    pub fn video_page_url(&self, video_id: &str) -> String {
        format!("{}/video/{}/", self.base, video_id)
    }

    /// Origin header value derived from the base URL.
    pub fn origin(&self) -> String {
        Url::parse(&self.base)
            .ok()
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_else(|| self.base.clone())
    }
}

/// Headers sent when fetching site pages. The user agent is fixed on the
/// client itself.
pub fn page_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers
}

/// Headers that make the CDN call look like the site's own player doing an
/// ajax form submission. Cookie and Content-Type are added by the caller
/// (Content-Type must come from the multipart encoder so the boundary
/// matches the body).
pub fn cdn_headers(referer: &str, origin: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    if let Ok(value) = HeaderValue::from_str(referer) {
        headers.insert(REFERER, value);
    }
    if let Ok(value) = HeaderValue::from_str(origin) {
        headers.insert(ORIGIN, value);
    }
    headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("empty"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("cors"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-site"));
    headers
}
