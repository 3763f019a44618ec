//! Students HTTP Server Binary
//!
//! This is the main entry point for the students REST API server.
//! It connects to the document store, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with local (in-memory) repository (default)
//! cargo run --bin students-server --features "local-repo,http-server"
//!
//! # Run with MongoDB repository
//! MONGODB_URI=mongodb://localhost:27017 \
//!   cargo run --bin students-server --features "mongo-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MONGODB_URI`: MongoDB connection string (required for mongo-repo feature)
//! - `STORE_BACKEND`: Repository backend override ("mongo" or "local")
//! - `REPOSITORY_CONFIG`: Optional path to a repository TOML file
//! - `RUST_LOG`: Log level (default: info, or debug when `DEBUG` is truthy)
//! - `DEBUG`: Truthy value raises the default log level to debug

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use students_api::db::RepositoryFactory;
use students_api::http::{create_router, AppState};

fn default_log_level() -> Level {
    let debug = env::var("DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false);
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_log_level),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Students HTTP Server");

    // Connect to the document store before binding the listener: an
    // unreachable store is fatal and the process must not begin serving.
    let repository = match env::var("REPOSITORY_CONFIG") {
        Ok(path) => RepositoryFactory::from_config_file(&path)
            .await
            .with_context(|| format!("failed to initialize repository from {path}"))?,
        Err(_) => RepositoryFactory::from_env()
            .await
            .context("failed to initialize repository")?,
    };
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API base path: http://{}/api/v1.0", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
