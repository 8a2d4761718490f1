//! gastbuch crate entrypoint.
//!
//! Starts the Tokio runtime and launches the web server defined in the
//! `server` module. Keep this file minimal — most application logic lives
//! in `server`, `state`, `config`, and `html`.
//!
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// HTML rendering and page generation
mod html;
/// Shared message log and visit counters
mod state;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gastbuch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    server::run().await;
}
