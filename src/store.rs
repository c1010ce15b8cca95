//! Shared site store: fragments keyed by site name, persisted as JSON.
//!
//! The store is the hand-off point between the fetch phase and the page
//! composition phase. Fetch tasks run concurrently and each finishes with
//! one [`update`](SiteStore::update) call; composition starts only after
//! every task has joined and reads the completed snapshot back with
//! [`read_all`](SiteStore::read_all).
//!
//! Every update rewrites the whole JSON snapshot while holding the store
//! lock. The data set is small (a dozen sites, three fragments each), so
//! a full rewrite is simpler and safer than any partial-update scheme, and
//! the on-disk file doubles as a debugging artifact for a crashed run.
//!
//! The store only spans one run: [`destroy`](SiteStore::destroy) tears the
//! backing directory down once the pages are written.

use crate::errors::StoreError;
use crate::models::{DataKind, SiteRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// File name of the JSON snapshot inside the store directory.
pub const STORE_FILE: &str = "store.json";

/// Default store location, a dedicated subdirectory of the system temp dir.
pub fn default_store_dir() -> PathBuf {
    std::env::temp_dir().join("surfcast")
}

/// Concurrent site-keyed fragment store backed by a JSON file.
#[derive(Debug)]
pub struct SiteStore {
    dir: PathBuf,
    file: PathBuf,
    records: Mutex<HashMap<String, SiteRecord>>,
}

impl SiteStore {
    /// Creates the store directory and persists an empty snapshot.
    ///
    /// Failing here is fatal to the run; without a writable store there is
    /// nothing for the fetch tasks to write into.
    pub async fn open(dir: PathBuf) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(&dir).await?;
        let store = Self {
            file: dir.join(STORE_FILE),
            dir,
            records: Mutex::new(HashMap::new()),
        };
        {
            let records = store.records.lock().await;
            store.persist(&records).await?;
        }
        Ok(store)
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Records one fragment for a site and persists the updated snapshot.
    ///
    /// The lock is held across the disk write so concurrent updates cannot
    /// interleave a stale snapshot over a newer one.
    #[instrument(level = "debug", skip_all, fields(site = %site, kind = %kind))]
    pub async fn update(&self, site: &str, kind: DataKind, fragment: String) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.entry(site.to_string()).or_default().set(kind, fragment);
        self.persist(&records).await?;
        debug!(sites = records.len(), "Store snapshot persisted");
        Ok(())
    }

    /// Reads the persisted snapshot back as a site-name map.
    pub async fn read_all(&self) -> Result<HashMap<String, SiteRecord>, StoreError> {
        let _records = self.records.lock().await;
        let json = tokio::fs::read_to_string(&self.file).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Removes the store directory and everything in it.
    pub async fn destroy(&self) -> Result<(), StoreError> {
        tokio::fs::remove_dir_all(&self.dir).await?;
        Ok(())
    }

    async fn persist(&self, records: &HashMap<String, SiteRecord>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.file, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_open_creates_empty_snapshot() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("store");
        let store = SiteStore::open(dir.clone()).await.unwrap();

        assert!(dir.join(STORE_FILE).is_file());
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_persists_fragment() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SiteStore::open(tmp.path().join("store")).await.unwrap();

        store
            .update("donghe", DataKind::Wind, "<div>wind</div>".to_string())
            .await
            .unwrap();

        let records = store.read_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records["donghe"].get(DataKind::Wind), Some("<div>wind</div>"));
        assert_eq!(records["donghe"].get(DataKind::Tide), None);

        // The snapshot on disk is the source of truth for composition.
        let raw = std::fs::read_to_string(tmp.path().join("store").join(STORE_FILE)).unwrap();
        assert!(raw.contains("donghe"));
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Arc::new(SiteStore::open(tmp.path().join("store")).await.unwrap());

        let mut handles = Vec::new();
        for kind in [DataKind::Wind, DataKind::Tide, DataKind::Weather] {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update("suao", kind, format!("<div>{kind}</div>"))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let records = store.read_all().await.unwrap();
        let record = &records["suao"];
        assert_eq!(record.get(DataKind::Wind), Some("<div>wind</div>"));
        assert_eq!(record.get(DataKind::Tide), Some("<div>tide</div>"));
        assert_eq!(record.get(DataKind::Weather), Some("<div>weather</div>"));
    }

    #[tokio::test]
    async fn test_updates_for_distinct_sites_coexist() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Arc::new(SiteStore::open(tmp.path().join("store")).await.unwrap());

        let mut handles = Vec::new();
        for site in ["canggu", "sanur"] {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update(site, DataKind::Tide, format!("<table>{site}</table>"))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let records = store.read_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records["canggu"].get(DataKind::Tide), Some("<table>canggu</table>"));
        assert_eq!(records["sanur"].get(DataKind::Tide), Some("<table>sanur</table>"));
    }

    #[tokio::test]
    async fn test_destroy_removes_backing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("store");
        let store = SiteStore::open(dir.clone()).await.unwrap();

        store
            .update("daan", DataKind::Weather, "<table/>".to_string())
            .await
            .unwrap();
        store.destroy().await.unwrap();

        assert!(!dir.exists());
        assert!(store.read_all().await.is_err());
    }
}
