//! Request handlers for the JSON API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::scrape;

/// API error carrying a status code and a JSON `{"error": ...}` body.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// Listing endpoint: scrape the catalog and return it as a JSON array.
///
/// The scrape layer degrades to an empty list on upstream failure, so this
/// handler always answers 200.
pub async fn api_videos(State(state): State<AppState>) -> impl IntoResponse {
    let videos = scrape::fetch_catalog(&state.client, &state.endpoints).await;
    Json(videos)
}

#[derive(Debug, Deserialize)]
pub struct VideoUrlRequest {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Resolution endpoint: turn a catalog video ID into a direct stream URL.
pub async fn api_video_url(
    State(state): State<AppState>,
    payload: Result<Json<VideoUrlRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let video_id = request
        .video_id
        .ok_or_else(|| ApiError::bad_request("videoId is required"))?;

    // Catalog IDs are plain digit strings; reject anything else before an
    // upstream URL is built from it.
    if video_id.is_empty() || !video_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::bad_request("videoId must be a numeric video id"));
    }

    match state.resolver.resolve(&video_id).await {
        Ok(video_url) => Ok(Json(serde_json::json!({ "videoUrl": video_url }))),
        Err(e) if e.is_not_found() => {
            tracing::warn!("no stream url for video {}: {}", video_id, e);
            Err(ApiError::not_found(format!(
                "no stream url found for video {}",
                video_id
            )))
        }
        Err(e) => {
            tracing::error!(
                "resolution failed for video {} at {}: {}",
                video_id,
                e.stage(),
                e
            );
            Err(ApiError::internal(format!(
                "failed to resolve video {}",
                video_id
            )))
        }
    }
}

/// Liveness probe.
pub async fn api_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
