//! JSON gateway in front of the upstream site.
//!
//! Two real endpoints, the scraped catalog listing and the stream URL
//! resolver, plus a health probe. Everything is stateless; each request
//! hits the upstream site fresh.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;

use reqwest::Client;

use crate::config::Settings;
use crate::scrape::{self, SiteEndpoints, StreamResolver};

/// Shared state for the gateway.
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub endpoints: SiteEndpoints,
    pub resolver: StreamResolver,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self::with_endpoints(settings, SiteEndpoints::default())
    }

    /// State wired to alternate endpoints; tests point this at stub servers.
    pub fn with_endpoints(settings: &Settings, endpoints: SiteEndpoints) -> Self {
        let client = scrape::build_client(settings.request_timeout());
        let resolver = StreamResolver::new(client.clone(), endpoints.clone());

        Self {
            client,
            endpoints,
            resolver,
        }
    }
}

/// Start the gateway server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            // Never resolve: an unavailable signal handler must not stop
            // the server.
            tracing::error!("failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
