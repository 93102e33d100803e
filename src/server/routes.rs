//! Router configuration for the gateway.

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/videos", get(handlers::api_videos).options(preflight))
        .route(
            "/api/video-url",
            post(handlers::api_video_url).options(preflight),
        )
        .route("/api/health", get(handlers::api_health).options(preflight))
        .fallback(handle_unmatched)
        .layer(cors)
        .with_state(state)
}

/// Bare OPTIONS requests (the CORS layer answers real preflights itself).
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Unmatched paths answer a plain 404, except OPTIONS which always succeeds.
async fn handle_unmatched(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        (StatusCode::NOT_FOUND, "Not found").into_response()
    }
}
