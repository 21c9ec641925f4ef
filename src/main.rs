//! # Tweetlinkify
//!
//! A Rust web service that renders Tweet text with its links, hashtags, mentions
//! and cashtags substituted and marked as clickable ranges.
//!
//! ## Environment Variables
//!
//! - `LINKIFY_STRIP_QUOTE_TWEET`, `LINKIFY_STRIP_VINE_CARD`: strip trailing links (default `true`)
//! - `LINKIFY_LINK_COLOR`, `LINKIFY_BACKGROUND_COLOR`, `LINKIFY_LINK_HIGHLIGHT_COLOR`: link colors
//! - `PORT`: Server port (defaults to 3000)
//!
//! ## API Endpoints
//!
//! - `GET /`: Returns a welcome message
//! - `GET /health`: Returns service health status
//! - `POST /linkify`: Renders a Tweet and returns its text and clickable spans
//! - `POST /trim`: Trims trailing whitespace from a text

use axum::{
    routing::{get, post},
    Router,
};
use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use tweetlinkify::{
    get_server_port, handle_health, handle_linkify, handle_root, handle_trim, LinkifyConfig,
};

/// Main entry point for the tweetlinkify web service.
///
/// Initializes logging, loads the linkify configuration, and serves the routes until
/// the process receives Ctrl-C.
///
/// # Logging
///
/// The application uses the `env_logger` crate for structured logging. Log levels
/// can be controlled via the `RUST_LOG` environment variable.
///
/// # Example Usage
///
/// ```bash
/// # Run with default port 3000
/// cargo run
///
/// # Run on custom port, keeping quote Tweet links
/// PORT=8080 LINKIFY_STRIP_QUOTE_TWEET=false cargo run
///
/// # Run with debug logging
/// RUST_LOG=debug cargo run
/// ```
#[tokio::main]
async fn main() {
    // Initialize the logging system
    env_logger::init();

    let config = match LinkifyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid linkify configuration: {}", e);
            warn!("Falling back to the default configuration");
            LinkifyConfig::default()
        }
    };

    // Build the HTTP application with all routes and middleware
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/linkify", post(handle_linkify))
        .route("/trim", post(handle_trim))
        .with_state(Arc::new(config))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Get the server port and bind address
    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting tweetlinkify server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutting down tweetlinkify server");
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!("HTTP server error: {}", e);
    }
}
