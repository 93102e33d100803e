//! Failure classes for the resolution pipeline.

use thiserror::Error;

/// Errors from the video page → CDN resolution sequence.
///
/// `NoStreamUrl` means the pipeline ran to completion but the CDN had no
/// usable URL for the video; every other variant is an infrastructure
/// failure somewhere along the way.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The video detail page could not be fetched with a success status.
    #[error("video page fetch failed: {0}")]
    PageFetch(String),

    /// The page response carried no csrf token.
    #[error("no csrf token in video page")]
    MissingToken,

    /// The page response carried no Set-Cookie headers.
    #[error("no session cookies in video page response")]
    MissingCookies,

    /// The CDN endpoint could not be reached or rejected the request.
    #[error("cdn request failed: {0}")]
    CdnHttp(String),

    /// The CDN returned a body that was not valid JSON.
    #[error("cdn response was not valid JSON: {0}")]
    CdnParse(String),

    /// The CDN answered but its JSON carried no stream URL.
    #[error("cdn response contained no stream url")]
    NoStreamUrl,
}

impl ResolveError {
    /// Pipeline stage the error belongs to, for log lines.
    pub fn stage(&self) -> &'static str {
        match self {
            ResolveError::PageFetch(_) => "fetch-page",
            ResolveError::MissingToken | ResolveError::MissingCookies => "extract-artifacts",
            ResolveError::CdnHttp(_) | ResolveError::CdnParse(_) | ResolveError::NoStreamUrl => {
                "call-cdn"
            }
        }
    }

    /// True when the failure means "no URL exists for this video" rather
    /// than "something broke".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NoStreamUrl)
    }
}
