//! Stream URL resolution.
//!
//! Resolution is a strict three-step sequence against the upstream site:
//! fetch the video detail page, harvest the csrf token and session cookies
//! from that one response, then replay both against the CDN resolve API.
//! No retries and no caching; every call performs the full dance.

use reqwest::header;
use reqwest::multipart::Form;
use reqwest::Client;

use super::error::ResolveError;
use super::extract;
use super::site::{self, SiteEndpoints};

/// Token and cookies harvested from a single video page response.
///
/// Both values must come from the same response. The CDN rejects a token
/// presented with another session's cookies, so these are never mixed
/// across fetches.
#[derive(Debug, Clone)]
pub struct SessionArtifacts {
    pub csrf_token: String,
    /// Ready-to-send Cookie header, `name=value` pairs joined with `"; "`.
    pub cookie_header: String,
}

/// Resolves direct stream URLs for catalog video IDs.
#[derive(Clone)]
pub struct StreamResolver {
    client: Client,
    endpoints: SiteEndpoints,
}

impl StreamResolver {
    pub fn new(client: Client, endpoints: SiteEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Resolve the direct stream URL for a video ID.
    pub async fn resolve(&self, video_id: &str) -> Result<String, ResolveError> {
        let page_url = self.endpoints.video_page_url(video_id);
        let artifacts = self.fetch_session_artifacts(&page_url).await?;
        self.call_cdn(video_id, &page_url, &artifacts).await
    }

    /// Steps one and two: fetch the video page and harvest token plus
    /// cookies from that single response.
    async fn fetch_session_artifacts(
        &self,
        page_url: &str,
    ) -> Result<SessionArtifacts, ResolveError> {
        let response = self
            .client
            .get(page_url)
            .headers(site::page_headers())
            .send()
            .await
            .map_err(|e| ResolveError::PageFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::PageFetch(format!("status {}", status)));
        }

        let raw_cookies: Vec<String> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::PageFetch(e.to_string()))?;

        let token = extract::csrf_token(&body);

        if raw_cookies.is_empty() {
            return Err(ResolveError::MissingCookies);
        }
        let cookie_header = normalize_set_cookie(&raw_cookies);

        let csrf_token = token.ok_or(ResolveError::MissingToken)?;

        Ok(SessionArtifacts {
            csrf_token,
            cookie_header,
        })
    }

    /// Step three: replay the session artifacts against the CDN resolve
    /// endpoint and read the stream URL out of its JSON answer.
    async fn call_cdn(
        &self,
        video_id: &str,
        page_url: &str,
        artifacts: &SessionArtifacts,
    ) -> Result<String, ResolveError> {
        // The pid_c field is always present and always empty; the CDN
        // rejects forms without it.
        let form = Form::new()
            .text("video_id", video_id.to_string())
            .text("pid_c", "")
            .text("token", artifacts.csrf_token.clone());

        // Content-Type stays unset so the multipart encoder emits its own
        // boundary.
        let response = self
            .client
            .post(&self.endpoints.cdn)
            .headers(site::cdn_headers(page_url, &self.endpoints.origin()))
            .header(header::COOKIE, artifacts.cookie_header.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ResolveError::CdnHttp(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::CdnHttp(format!("status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::CdnHttp(e.to_string()))?;

        let json: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("unparseable cdn response: {}", body);
            ResolveError::CdnParse(e.to_string())
        })?;

        match json.get("playlists").and_then(|value| value.as_str()) {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            _ => Err(ResolveError::NoStreamUrl),
        }
    }
}

/// Collapse raw `Set-Cookie` values into a single Cookie header.
///
/// Each value may itself hold several comma-folded cookies. Attributes after
/// the first `;` are dropped, as are pieces that are not `name=value` shaped
/// (comma-splitting chops `Expires=...` dates into such fragments).
pub fn normalize_set_cookie(raw: &[String]) -> String {
    raw.iter()
        .flat_map(|value| value.split(','))
        .filter_map(|cookie| cookie.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect::<Vec<_>>()
        .join("; ")
}
