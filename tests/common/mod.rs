//! Shared stub-site plumbing for integration tests.
//!
//! The pipeline under test only cares about HTTP semantics, so the stubs
//! are real axum servers bound to ephemeral localhost ports.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use streamgate::scrape::SiteEndpoints;

/// Catalog page served by the stub site at `/videos/`.
pub const CATALOG_HTML: &str = r#"
    <html><body>
    <div class="video-list">
      <div class="video-item">
        <a class="video-link" href="/video/1001/first-light/">
          <img class="thumb" data-src="https://img.example/1001.jpg">
        </a>
        <span class="quality">HD</span>
        <span class="duration">21:09</span>
        <span class="video-code">FL-001</span>
        <a class="title" href="/video/1001/first-light/" title="First Light">First Light</a>
      </div>
      <div class="video-item">
        <a class="video-link" href="/video/1002/second-wind/">
          <img class="thumb" src="https://img.example/1002.jpg">
        </a>
        <span class="duration">08:41</span>
        <a class="title" href="/video/1002/second-wind/">Second Wind</a>
      </div>
    </div>
    </body></html>
"#;

/// Behavior of the stub video detail page.
pub struct PageStub {
    pub status: StatusCode,
    pub body: String,
    pub set_cookies: Vec<String>,
}

impl PageStub {
    /// Healthy page carrying a csrf token.
    pub fn with_token(token: &str, cookies: &[&str]) -> Self {
        Self {
            status: StatusCode::OK,
            body: video_page_html(Some(token)),
            set_cookies: cookies.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Healthy page whose player element has no token attribute.
    pub fn without_token(cookies: &[&str]) -> Self {
        Self {
            status: StatusCode::OK,
            body: video_page_html(None),
            set_cookies: cookies.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Page endpoint answering with an error status.
    pub fn failing(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
            set_cookies: Vec::new(),
        }
    }
}

pub fn video_page_html(token: Option<&str>) -> String {
    match token {
        Some(token) => format!(
            r#"<html><body><div id="player" data-csrf-token="{}"></div></body></html>"#,
            token
        ),
        None => r#"<html><body><div id="player"></div></body></html>"#.to_string(),
    }
}

/// What the stub CDN endpoint observed, for assertions.
#[derive(Debug, Default)]
pub struct CdnRecorder {
    pub hits: AtomicUsize,
    pub cookie: Mutex<Option<String>>,
    pub content_type: Mutex<Option<String>>,
    pub body: Mutex<Option<String>>,
}

/// Bind `app` on an ephemeral port and serve it for the rest of the test.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Spin up one stub server playing both the site and the CDN, and return
/// endpoints pointing at it.
pub async fn spawn_site(
    page: PageStub,
    cdn_status: StatusCode,
    cdn_body: &str,
) -> (SiteEndpoints, Arc<CdnRecorder>) {
    let recorder = Arc::new(CdnRecorder::default());
    let page = Arc::new(page);

    let page_handler = {
        let page = page.clone();
        move || {
            let page = page.clone();
            async move {
                let mut headers = HeaderMap::new();
                for cookie in &page.set_cookies {
                    if let Ok(value) = HeaderValue::from_str(cookie) {
                        headers.append(header::SET_COOKIE, value);
                    }
                }
                (page.status, headers, Html(page.body.clone()))
            }
        }
    };

    let cdn_handler = {
        let recorder = recorder.clone();
        let cdn_body = cdn_body.to_string();
        move |headers: HeaderMap, body: String| {
            let recorder = recorder.clone();
            let cdn_body = cdn_body.clone();
            async move {
                recorder.hits.fetch_add(1, Ordering::SeqCst);
                *recorder.cookie.lock().unwrap() = header_string(&headers, header::COOKIE);
                *recorder.content_type.lock().unwrap() =
                    header_string(&headers, header::CONTENT_TYPE);
                *recorder.body.lock().unwrap() = Some(body);
                (cdn_status, cdn_body)
            }
        }
    };

    let app = Router::new()
        .route("/videos/", get(|| async { Html(CATALOG_HTML) }))
        .route("/video/:id/", get(page_handler))
        .route("/cdn", post(cdn_handler));

    let base = spawn(app).await;
    let endpoints = SiteEndpoints {
        cdn: format!("{}/cdn", base),
        base,
    };

    (endpoints, recorder)
}

/// Endpoints guaranteed unreachable: the port was bound and released.
pub async fn dead_endpoints() -> SiteEndpoints {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{}", addr);
    SiteEndpoints {
        cdn: format!("{}/cdn", base),
        base,
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}
