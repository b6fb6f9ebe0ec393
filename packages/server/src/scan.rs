//! The run orchestrator: single-flight scans fanning out across all
//! registered sources.
//!
//! Exactly one scan may run at a time, process-wide. Acquisition is
//! non-blocking - a trigger while a scan is in progress is reported as
//! [`ScanOutcome::AlreadyRunning`], never queued. Release is an RAII guard,
//! so the run state returns to idle on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Duration, Utc};
use scanner::JobSource;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::notify::{build_message, Notifier};
use crate::store::{Snapshot, SnapshotStore};

/// Process-wide scan state: the current snapshot, the single-flight run
/// flag, and the collaborators every run needs. Passed explicitly to the
/// scheduler and the HTTP surface - there are no globals.
pub struct ScanContext {
    store: SnapshotStore,
    snapshot: RwLock<Snapshot>,
    running: AtomicBool,
    client: reqwest::Client,
    interval_hours: i64,
    notifier: Option<Box<dyn Notifier>>,
}

/// Resets the run flag on drop, including the panic path.
struct RunGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl ScanContext {
    pub fn new(
        store: SnapshotStore,
        initial: Snapshot,
        client: reqwest::Client,
        interval_hours: i64,
        notifier: Option<Box<dyn Notifier>>,
    ) -> Self {
        Self {
            store,
            snapshot: RwLock::new(initial),
            running: AtomicBool::new(false),
            client,
            interval_hours,
            notifier,
        }
    }

    /// Clone of the current snapshot. Readers never observe a partially
    /// assembled one; a scan in progress keeps serving the previous
    /// snapshot until the swap.
    pub async fn current(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn interval_hours(&self) -> i64 {
        self.interval_hours
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    fn try_begin(&self) -> Option<RunGuard<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| RunGuard {
                flag: &self.running,
            })
    }
}

/// Result of a scan trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Another scan holds the single-flight guard; nothing was done.
    AlreadyRunning,
    /// The scan ran to completion. `persisted` is false when the snapshot
    /// could not be written to the durable store.
    Completed { listings: usize, persisted: bool },
}

/// Trigger a full scan across every registered source.
pub async fn run_scan(ctx: &ScanContext, notify: bool) -> ScanOutcome {
    run_scan_with(ctx, scanner::registry(), notify).await
}

/// Scan over an explicit source list. The orchestration is identical to
/// [`run_scan`]; tests substitute mock sources here.
pub async fn run_scan_with(
    ctx: &ScanContext,
    sources: Vec<Box<dyn JobSource>>,
    notify: bool,
) -> ScanOutcome {
    let Some(_guard) = ctx.try_begin() else {
        info!("Scan already in progress, ignoring trigger");
        return ScanOutcome::AlreadyRunning;
    };

    let started_at = Utc::now();
    info!(notify, sources = sources.len(), "Scan started");

    // Fan out: sources are independent and fetch concurrently. A failing
    // source degrades to an empty result and never blocks the others.
    let mut handles = Vec::new();
    for source in sources {
        let client = ctx.client.clone();
        handles.push(tokio::spawn(async move {
            let name = source.name();
            match source.fetch(&client).await {
                Ok(found) => {
                    info!(source = name, count = found.len(), "Source scan complete");
                    found
                }
                Err(e) => {
                    warn!(source = name, error = %e, "Source scan failed, treating as empty");
                    Vec::new()
                }
            }
        }));
    }

    // Collect in spawn order so snapshot order follows the registry
    let mut raw = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(found) => raw.extend(found),
            Err(e) => warn!(error = %e, "Source task panicked, treating as empty"),
        }
    }

    let completed_at = Utc::now();
    let snapshot = Snapshot {
        jobs: scanner::normalize(raw),
        last_scan: Some(completed_at),
        next_scan: Some(completed_at + Duration::hours(ctx.interval_hours)),
    };

    // Persistence failure is surfaced distinctly: the snapshot still swaps
    // in, but the results would not survive a restart.
    let persisted = match ctx.store.save(&snapshot) {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Failed to persist snapshot");
            false
        }
    };

    let listings = snapshot.jobs.len();
    *ctx.snapshot.write().await = snapshot.clone();

    if notify {
        match &ctx.notifier {
            Some(notifier) => {
                let message = build_message(&snapshot);
                if let Err(e) = notifier.send(&message).await {
                    error!(error = %e, "Notification delivery failed");
                }
            }
            None => info!("No notifier configured, skipping notification"),
        }
    }

    info!(
        listings,
        persisted,
        duration_ms = (completed_at - started_at).num_milliseconds(),
        "Scan completed"
    );
    ScanOutcome::Completed {
        listings,
        persisted,
    }
}
