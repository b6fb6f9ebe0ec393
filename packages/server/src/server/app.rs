//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::scan::ScanContext;
use crate::server::routes::{
    health_handler, jobs_handler, scan_handler, sources_handler, status_handler,
};
use crate::server::static_files;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ScanContext>,
}

pub fn build_app(ctx: Arc<ScanContext>) -> Router {
    Router::new()
        .route("/", get(static_files::serve_index))
        .route("/health", get(health_handler))
        .route("/api/jobs", get(jobs_handler))
        .route("/api/sources", get(sources_handler))
        .route("/api/scan", post(scan_handler))
        .route("/api/status", get(status_handler))
        .layer(Extension(AppState { ctx }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
