//! Parivar Portal - Family association management site.
//!
//! This binary serves the member-facing portal on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework with server-rendered pages
//! - Askama templates with an English/Gujarati view context
//! - In-memory account store and seeded directory collections
//! - Cookie sessions (tower-sessions, in-memory store)
//!
//! All state lives in process memory for the process lifetime; there is
//! no database and nothing survives a restart.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The binary compiles the same modules as the library; helpers only the
// library's tests exercise are fine to leave unused here
#![allow(dead_code)]
#![allow(unused_imports)]

mod config;
mod context;
mod directory;
mod error;
mod filters;
mod middleware;
mod models;
mod routes;
mod state;
mod store;

use config::PortalConfig;
use state::AppState;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = PortalConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "parivar_portal=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state (seeds the account roster and directory)
    let state = AppState::new(config.clone());
    tracing::info!(accounts = state.users().len(), "Application state seeded");

    // Build router
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("portal listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
