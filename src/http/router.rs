//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/students", get(handlers::list_students))
        .route("/students/{id}", get(handlers::get_student))
        .route("/students/add", post(handlers::add_students))
        .route("/students/update/{id}", put(handlers::update_student))
        .route("/students/delete/{id}", delete(handlers::delete_student))
        .route("/students/update-all", put(handlers::update_all_students));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1.0", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
