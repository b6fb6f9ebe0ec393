use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

// Dashboard page embedded at compile time
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct DashboardAssets;

/// Serve the dashboard landing page.
pub async fn serve_index() -> Response {
    match DashboardAssets::get("index.html") {
        Some(content) => {
            ([(header::CONTENT_TYPE, "text/html")], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
