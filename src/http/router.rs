//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
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
        // Authentication
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        // Case CRUD
        .route("/cases", get(handlers::list_cases))
        .route("/cases", post(handlers::create_case))
        // Timeline events
        .route("/cases/{case_id}/events", get(handlers::list_events))
        .route("/cases/{case_id}/events", post(handlers::create_event))
        // Document metadata
        .route("/cases/{case_id}/documents", get(handlers::list_documents))
        .route("/cases/{case_id}/documents", post(handlers::create_document))
        // Derived reports
        .route("/cases/{case_id}/summary", get(handlers::get_case_summary))
        .route("/cases/{case_id}/patterns", get(handlers::get_pattern_analysis))
        .route("/cases/{case_id}/evidence", get(handlers::get_evidence_summary))
        .route("/cases/{case_id}/chronology", get(handlers::get_chronology))
        .route("/cases/{case_id}/export", get(handlers::export_case))
        // Cross-case views
        .route("/insights", get(handlers::get_case_insights))
        .route("/dashboard", get(handlers::get_dashboard));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
