use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    store: StoreHealth,
    listings: usize,
    scan_running: bool,
}

#[derive(Serialize)]
pub struct StoreHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks that the durable snapshot store is readable. Returns 200 OK when
/// healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store_health = match state.ctx.store().load() {
        Ok(_) => StoreHealth {
            status: "ok".to_string(),
            error: None,
        },
        Err(e) => StoreHealth {
            status: "error".to_string(),
            error: Some(e.to_string()),
        },
    };

    let is_healthy = store_health.status == "ok";
    let snapshot = state.ctx.current().await;

    (
        if is_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        },
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            store: store_health,
            listings: snapshot.jobs.len(),
            scan_running: state.ctx.is_running(),
        }),
    )
}
