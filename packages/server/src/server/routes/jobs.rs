//! Read endpoints over the current snapshot.

use axum::extract::{Extension, Query};
use axum::Json;
use chrono::{DateTime, Utc};
use scanner::Listing;
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub source: Option<String>,
    pub status: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Listing>,
    pub total: usize,
    pub last_scan: Option<DateTime<Utc>>,
    pub next_scan: Option<DateTime<Utc>>,
    pub scan_running: bool,
}

/// List current listings, filterable by source (case-insensitive exact),
/// status, and free-text match against title or location.
pub async fn jobs_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<JobsQuery>,
) -> Json<JobsResponse> {
    let snapshot = state.ctx.current().await;
    let jobs = filter_jobs(snapshot.jobs, &params);
    Json(JobsResponse {
        total: jobs.len(),
        jobs,
        last_scan: snapshot.last_scan,
        next_scan: snapshot.next_scan,
        scan_running: state.ctx.is_running(),
    })
}

pub fn filter_jobs(jobs: Vec<Listing>, params: &JobsQuery) -> Vec<Listing> {
    jobs.into_iter()
        .filter(|job| {
            params
                .source
                .as_ref()
                .map_or(true, |s| job.source.to_lowercase() == s.to_lowercase())
        })
        .filter(|job| {
            params
                .status
                .as_ref()
                .map_or(true, |s| job.status.as_str() == s)
        })
        .filter(|job| {
            params.q.as_ref().map_or(true, |q| {
                let q = q.to_lowercase();
                job.title.to_lowercase().contains(&q) || job.location.to_lowercase().contains(&q)
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct SourcesResponse {
    pub sources: Vec<String>,
}

/// Distinct source identifiers present in the current snapshot, sorted.
pub async fn sources_handler(Extension(state): Extension<AppState>) -> Json<SourcesResponse> {
    let snapshot = state.ctx.current().await;
    let mut sources: Vec<String> = snapshot.jobs.iter().map(|j| j.source.clone()).collect();
    sources.sort();
    sources.dedup();
    Json(SourcesResponse { sources })
}
