//! Scan trigger and aggregate status endpoints.

use axum::extract::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scan::run_scan;
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct ScanTriggerResponse {
    pub message: String,
    pub status: String,
}

/// Trigger an on-demand scan in the background, without notification.
/// Idempotent while a scan runs: the caller gets the current state back
/// instead of an error.
pub async fn scan_handler(Extension(state): Extension<AppState>) -> Json<ScanTriggerResponse> {
    if state.ctx.is_running() {
        return Json(ScanTriggerResponse {
            message: "Scan déjà en cours".to_string(),
            status: "running".to_string(),
        });
    }

    let ctx = state.ctx.clone();
    tokio::spawn(async move {
        run_scan(&ctx, false).await;
    });

    Json(ScanTriggerResponse {
        message: "Scan lancé".to_string(),
        status: "started".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub total: usize,
    pub active: usize,
    pub full_companies: usize,
    pub last_scan: Option<DateTime<Utc>>,
    pub next_scan: Option<DateTime<Utc>>,
    pub scan_running: bool,
}

pub async fn status_handler(Extension(state): Extension<AppState>) -> Json<StatusResponse> {
    let snapshot = state.ctx.current().await;
    Json(StatusResponse {
        total: snapshot.jobs.len(),
        active: snapshot.active_count(),
        full_companies: snapshot.full_count(),
        last_scan: snapshot.last_scan,
        next_scan: snapshot.next_scan,
        scan_running: state.ctx.is_running(),
    })
}
