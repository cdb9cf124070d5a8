//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo handler
//! - Wire up middleware (tracing, timeout, Accept-Events)
//! - Bind server to listener and shut down on Ctrl+C

use axum::{
    extract::Extension,
    http::{Method, Uri},
    routing::any,
    Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::events::AcceptedEvents;
use crate::http::middleware::AcceptEventsLayer;

/// Body returned by the echo handler.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub method: String,
    pub path: String,
    /// `None` when the request expressed no usable preference.
    pub accept_events: Option<AcceptedEvents>,
}

/// HTTP server exposing the Accept-Events negotiation.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_layer(config, AcceptEventsLayer::new())
    }

    /// Create a server around a preconfigured Accept-Events layer.
    pub fn with_layer(config: ServerConfig, layer: AcceptEventsLayer) -> Self {
        let router = Self::build_router(&config, layer);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, layer: AcceptEventsLayer) -> Router {
        Router::new()
            .route("/{*path}", any(echo_handler))
            .route("/", any(echo_handler))
            .layer(layer)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, e.g. for `oneshot` testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Reports the method, path and negotiated events back to the client.
async fn echo_handler(
    method: Method,
    uri: Uri,
    accepted: Option<Extension<AcceptedEvents>>,
) -> Json<EchoResponse> {
    let accept_events = accepted.map(|Extension(events)| events);

    tracing::debug!(
        method = %method,
        path = %uri.path(),
        annotated = accept_events.is_some(),
        "Echoing request"
    );

    Json(EchoResponse {
        method: method.to_string(),
        path: uri.path().to_string(),
        accept_events,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
