//! Orchestrator integration tests: single-flight guard, per-source failure
//! isolation, snapshot replacement and persistence.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use scanner::{JobSource, RawListing};
use server_core::scan::{run_scan_with, ScanContext, ScanOutcome};
use server_core::store::{Snapshot, SnapshotStore};

struct StaticSource {
    name: &'static str,
    titles: &'static [&'static str],
    delay: Duration,
}

#[async_trait]
impl JobSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _client: &reqwest::Client) -> Result<Vec<RawListing>> {
        tokio::time::sleep(self.delay).await;
        Ok(self
            .titles
            .iter()
            .map(|title| RawListing::new(*title, "https://example.com/job", None, self.name))
            .collect())
    }
}

struct FailingSource;

#[async_trait]
impl JobSource for FailingSource {
    fn name(&self) -> &'static str {
        "Failing"
    }

    async fn fetch(&self, _client: &reqwest::Client) -> Result<Vec<RawListing>> {
        anyhow::bail!("connection reset by peer")
    }
}

fn test_context(dir: &Path) -> ScanContext {
    ScanContext::new(
        SnapshotStore::new(dir.join("jobs_data.json")),
        Snapshot::default(),
        reqwest::Client::new(),
        12,
        None,
    )
}

fn static_source(
    name: &'static str,
    titles: &'static [&'static str],
    delay_ms: u64,
) -> Box<dyn JobSource> {
    Box::new(StaticSource {
        name,
        titles,
        delay: Duration::from_millis(delay_ms),
    })
}

#[tokio::test]
async fn test_concurrent_triggers_run_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = Arc::new(test_context(dir.path()));

    let slow = vec![static_source("Slow", &["Pilot PC-12"], 300)];
    let first_ctx = ctx.clone();
    let first = tokio::spawn(async move { run_scan_with(&first_ctx, slow, false).await });

    // Let the first trigger acquire the guard, then trigger again
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = run_scan_with(&ctx, vec![static_source("Fast", &["Captain"], 0)], false).await;
    assert_eq!(second, ScanOutcome::AlreadyRunning);

    let first = first.await.unwrap();
    assert_eq!(
        first,
        ScanOutcome::Completed {
            listings: 1,
            persisted: true
        }
    );

    // The rejected trigger altered neither the snapshot nor the run state
    let snapshot = ctx.current().await;
    assert_eq!(snapshot.jobs.len(), 1);
    assert_eq!(snapshot.jobs[0].source, "Slow");
    assert!(!ctx.is_running());
}

#[tokio::test]
async fn test_failing_source_does_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(dir.path());

    let sources = vec![
        Box::new(FailingSource) as Box<dyn JobSource>,
        static_source("Jetfly", &["Captain PC-24", "First Officer PC-12"], 0),
    ];
    let outcome = run_scan_with(&ctx, sources, false).await;

    assert_eq!(
        outcome,
        ScanOutcome::Completed {
            listings: 2,
            persisted: true
        }
    );
    let snapshot = ctx.current().await;
    assert!(snapshot.jobs.iter().all(|j| j.source == "Jetfly"));
}

#[tokio::test]
async fn test_empty_run_still_yields_valid_persisted_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(dir.path());

    let outcome = run_scan_with(&ctx, Vec::new(), false).await;
    assert_eq!(
        outcome,
        ScanOutcome::Completed {
            listings: 0,
            persisted: true
        }
    );

    let snapshot = ctx.current().await;
    assert!(snapshot.jobs.is_empty());
    let last = snapshot.last_scan.expect("last_scan set");
    let next = snapshot.next_scan.expect("next_scan set");
    assert_eq!(next - last, chrono::Duration::hours(12));

    // And it round-trips from the durable store
    let reloaded = SnapshotStore::new(dir.path().join("jobs_data.json"))
        .load()
        .unwrap();
    assert_eq!(reloaded, snapshot);
}

#[tokio::test]
async fn test_snapshot_is_replaced_not_merged() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(dir.path());

    run_scan_with(&ctx, vec![static_source("A", &["Pilot one"], 0)], false).await;
    run_scan_with(&ctx, vec![static_source("B", &["Pilot two"], 0)], false).await;

    let snapshot = ctx.current().await;
    assert_eq!(snapshot.jobs.len(), 1);
    assert_eq!(snapshot.jobs[0].source, "B");
}

#[tokio::test]
async fn test_listing_order_follows_source_registration_order() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(dir.path());

    // The slower source is registered first and must still come first
    let sources = vec![
        static_source("First", &["Pilot alpha"], 150),
        static_source("Second", &["Pilot beta"], 0),
    ];
    run_scan_with(&ctx, sources, false).await;

    let snapshot = ctx.current().await;
    assert_eq!(snapshot.jobs[0].source, "First");
    assert_eq!(snapshot.jobs[1].source, "Second");
}
