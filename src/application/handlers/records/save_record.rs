//! SaveRecordHandler - captures a finished ticket into the record store.

use std::sync::Arc;
use tracing::info;

use crate::application::TriageError;
use crate::domain::foundation::{RecordId, Timestamp};
use crate::domain::records::SavedRecord;
use crate::domain::triage::TicketAnalyzer;
use crate::ports::RecordStore;

/// Command to save a ticket.
#[derive(Debug, Clone)]
pub struct SaveRecordCommand {
    pub notes: String,
    /// The reply the agent settled on; the local draft when absent.
    pub draft_reply: Option<String>,
}

pub struct SaveRecordHandler {
    analyzer: Arc<TicketAnalyzer>,
    store: Arc<dyn RecordStore>,
    raw_text_limit: usize,
}

impl SaveRecordHandler {
    pub fn new(
        analyzer: Arc<TicketAnalyzer>,
        store: Arc<dyn RecordStore>,
        raw_text_limit: usize,
    ) -> Self {
        Self {
            analyzer,
            store,
            raw_text_limit,
        }
    }

    pub async fn handle(&self, cmd: SaveRecordCommand) -> Result<SavedRecord, TriageError> {
        TriageError::require_notes(&cmd.notes)?;

        let analysis = self.analyzer.analyze(&cmd.notes);
        let draft_reply = cmd
            .draft_reply
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| analysis.draft.body.clone());

        let record = SavedRecord::capture(
            RecordId::new(),
            Timestamp::now(),
            &analysis,
            &draft_reply,
            &cmd.notes,
            self.raw_text_limit,
        );

        self.store.add(record.clone()).await?;

        info!(
            record_id = %record.id,
            issue = %record.issue,
            raw_chars = record.raw_chars(),
            "Record saved"
        );

        Ok(record)
    }
}
