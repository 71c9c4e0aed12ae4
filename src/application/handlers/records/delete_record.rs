//! Record removal: one by id, or the whole cache.

use std::sync::Arc;
use tracing::info;

use crate::application::TriageError;
use crate::domain::foundation::RecordId;
use crate::ports::RecordStore;

#[derive(Debug, Clone)]
pub struct DeleteRecordCommand {
    pub id: RecordId,
}

pub struct DeleteRecordHandler {
    store: Arc<dyn RecordStore>,
}

impl DeleteRecordHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteRecordCommand) -> Result<(), TriageError> {
        if !self.store.remove(&cmd.id).await? {
            return Err(TriageError::RecordNotFound(cmd.id));
        }
        info!(record_id = %cmd.id, "Record deleted");
        Ok(())
    }
}

pub struct ClearRecordsHandler {
    store: Arc<dyn RecordStore>,
}

impl ClearRecordsHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), TriageError> {
        self.store.clear().await?;
        info!("Record cache cleared");
        Ok(())
    }
}
