use std::sync::Arc;

use crate::application::TriageError;
use crate::domain::records::SavedRecord;
use crate::ports::RecordStore;

/// Query handler for saved records, newest first.
pub struct ListRecordsHandler {
    store: Arc<dyn RecordStore>,
}

impl ListRecordsHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<SavedRecord>, TriageError> {
        Ok(self.store.list().await?)
    }
}
