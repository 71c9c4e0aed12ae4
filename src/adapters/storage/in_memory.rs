//! In-memory record store for tests and ephemeral deployments.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::RecordId;
use crate::domain::records::SavedRecord;
use crate::ports::{RecordStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<SavedRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; `records` should already be newest first.
    pub fn with_records(records: Vec<SavedRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list(&self) -> Result<Vec<SavedRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn add(&self, record: SavedRecord) -> Result<(), StoreError> {
        self.records.write().await.insert(0, record);
        Ok(())
    }

    async fn remove(&self, id: &RecordId) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| &r.id != id);
        Ok(records.len() != before)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::records::DEFAULT_RAW_TEXT_LIMIT;
    use crate::domain::triage::analyze;

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

    #[tokio::test]
    async fn add_prepends() {
        let store = InMemoryRecordStore::new();
        store.add(record("first")).await.unwrap();
        store.add(record("second")).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].raw_text, "second");
        assert_eq!(records[1].raw_text, "first");
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_matched() {
        let store = InMemoryRecordStore::new();
        let saved = record("note");
        let id = saved.id;
        store.add(saved).await.unwrap();

        assert!(store.remove(&id).await.unwrap());
        assert!(!store.remove(&id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_empties_store() {
        let store = InMemoryRecordStore::with_records(vec![record("a"), record("b")]);
        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = InMemoryRecordStore::new();
        let other = store.clone();
        store.add(record("shared")).await.unwrap();
        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
