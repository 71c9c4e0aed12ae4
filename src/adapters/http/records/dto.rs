//! Request and response DTOs for saved-record endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::records::SavedRecord;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecordRequest {
    #[serde(default)]
    pub notes: String,
    /// Reply the agent settled on; the local draft is saved when absent.
    #[serde(default)]
    pub draft_reply: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordListResponse {
    pub records: Vec<SavedRecord>,
    pub count: usize,
}

impl From<Vec<SavedRecord>> for RecordListResponse {
    fn from(records: Vec<SavedRecord>) -> Self {
        Self {
            count: records.len(),
            records,
        }
    }
}
