//! RecordStore port - best-effort local cache of saved tickets.

use async_trait::async_trait;

use crate::domain::foundation::RecordId;
use crate::domain::records::SavedRecord;

/// Storage for saved records, newest first.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, most recently added first.
    async fn list(&self) -> Result<Vec<SavedRecord>, StoreError>;

    /// Prepends a record.
    async fn add(&self, record: SavedRecord) -> Result<(), StoreError>;

    /// Removes a record by id. Returns false when no record matched.
    async fn remove(&self, id: &RecordId) -> Result<bool, StoreError>;

    async fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record store I/O error: {0}")]
    Io(String),

    #[error("record serialization failed: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
