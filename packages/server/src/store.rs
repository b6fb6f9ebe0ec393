//! Durable snapshot store: one JSON document holding the full result of the
//! latest completed scan.
//!
//! The store is deliberately dumb - load the whole snapshot, save the whole
//! snapshot. Persistence failure is the one error class this system
//! surfaces distinctly, since it silently loses scan results across
//! restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use scanner::{Listing, ListingStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshot file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot serialization: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Aggregate result of one completed scan. Replaced as a whole; readers
/// observe the previous snapshot until the next one is swapped in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub jobs: Vec<Listing>,
    #[serde(default)]
    pub last_scan: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_scan: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn active_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.status == ListingStatus::Active)
            .count()
    }

    /// Number of fully-staffed source markers in the snapshot.
    pub fn full_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.status == ListingStatus::Full)
            .count()
    }
}

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot. A missing file is a first-ever start and
    /// yields an empty snapshot, not an error.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(body) => Ok(serde_json::from_str(&body)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist a snapshot. Write-then-rename so a crash mid-write never
    /// leaves a truncated store behind.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let body = serde_json::to_string(snapshot)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanner::RawListing;

    fn sample_snapshot() -> Snapshot {
        let now = Utc::now();
        Snapshot {
            jobs: scanner::normalize(vec![
                RawListing::new("PILOT PC12 LSGG", "https://x/1", None, "Jetfly"),
                RawListing::fully_staffed("Effectifs complets", "https://x/2", "Lyon", "Oyonnair"),
            ]),
            last_scan: Some(now),
            next_scan: Some(now + chrono::Duration::hours(12)),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("jobs_data.json"));
        let snapshot = store.load().unwrap();
        assert!(snapshot.jobs.is_empty());
        assert!(snapshot.last_scan.is_none());
    }

    #[test]
    fn test_round_trip_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("jobs_data.json"));

        let snapshot = sample_snapshot();
        store.save(&snapshot).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(reloaded, snapshot);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("jobs_data.json"));

        store.save(&sample_snapshot()).unwrap();
        store.save(&Snapshot::default()).unwrap();
        assert!(store.load().unwrap().jobs.is_empty());
    }

    #[test]
    fn test_counts() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.active_count(), 1);
        assert_eq!(snapshot.full_count(), 1);
    }
}
