//! JSON-file record store.
//!
//! The whole cache is one pretty-printed JSON array, newest record first.
//! A missing, unreadable, or non-array file loads as an empty cache; the
//! next write replaces it. Writes go to a sibling temp file and are renamed
//! into place.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::foundation::RecordId;
use crate::domain::records::SavedRecord;
use crate::ports::{RecordStore, StoreError};

pub struct JsonFileRecordStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl JsonFileRecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Vec<SavedRecord> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Record cache unreadable");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SavedRecord>>(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Record cache is not a record list");
                Vec::new()
            }
        }
    }

    async fn persist(&self, records: &[SavedRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json).await?;
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn list(&self) -> Result<Vec<SavedRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await)
    }

    async fn add(&self, record: SavedRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await;
        records.insert(0, record);
        self.persist(&records).await
    }

    async fn remove(&self, id: &RecordId) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.persist(&records).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.persist(&[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::records::DEFAULT_RAW_TEXT_LIMIT;
    use crate::domain::triage::analyze;
    use tempfile::TempDir;

    fn record(note: &str) -> SavedRecord {
        SavedRecord::capture(
            RecordId::new(),
            Timestamp::now(),
            &analyze(note),
            "reply",
            note,
            DEFAULT_RAW_TEXT_LIMIT,
        )
    }

    fn store_in(dir: &TempDir) -> JsonFileRecordStore {
        JsonFileRecordStore::new(dir.path().join("records.json"))
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let saved = record("Itinerary # H1234567");
        store_in(&dir).add(saved.clone()).await.unwrap();

        let records = store_in(&dir).list().await.unwrap();

        assert_eq!(records, vec![saved]);
    }

    #[tokio::test]
    async fn newest_record_is_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add(record("older")).await.unwrap();
        store.add(record("newer")).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records[0].raw_text, "newer");
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty_and_is_replaced() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.list().await.unwrap().is_empty());

        store.add(record("fresh")).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_array_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"records": []}"#).unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn writes_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add(record("note")).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"savedAt\""));
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let keep = record("keep");
        let drop = record("drop");
        let drop_id = drop.id;
        store.add(keep.clone()).await.unwrap();
        store.add(drop).await.unwrap();

        assert!(store.remove(&drop_id).await.unwrap());
        assert!(!store.remove(&drop_id).await.unwrap());
        assert_eq!(store.list().await.unwrap(), vec![keep]);

        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileRecordStore::new(dir.path().join("nested/cache/records.json"));
        store.add(record("note")).await.unwrap();
        assert!(store.path().exists());
    }
}
