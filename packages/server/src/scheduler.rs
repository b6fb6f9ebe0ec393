//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! Two independent triggers dispatch onto the same scan entry point and
//! share nothing but the single-flight guard:
//! - the periodic scan, notification enabled;
//! - a startup one-shot, notification disabled, fired only when the
//!   restored snapshot holds zero listings - a mere process restart must
//!   never ping the notification channel.

use std::sync::Arc;

use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::scan::{run_scan, ScanContext};

/// Start all scheduled tasks
pub async fn start(ctx: Arc<ScanContext>) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let cron = format!("0 0 */{} * * *", ctx.interval_hours());
    let scan_ctx = ctx.clone();
    let scan_job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let ctx = scan_ctx.clone();
        Box::pin(async move {
            let outcome = run_scan(&ctx, true).await;
            tracing::info!(?outcome, "Periodic scan finished");
        })
    })?;

    scheduler.add(scan_job).await?;
    scheduler.start().await?;

    tracing::info!(
        interval_hours = ctx.interval_hours(),
        "Scheduled periodic scans"
    );

    if ctx.current().await.jobs.is_empty() {
        tracing::info!("Restored snapshot is empty, triggering startup scan");
        let startup_ctx = ctx.clone();
        tokio::spawn(async move {
            run_scan(&startup_ctx, false).await;
        });
    }

    Ok(scheduler)
}
