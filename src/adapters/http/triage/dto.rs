//! Request and response DTOs for triage endpoints.

use serde::{Deserialize, Serialize};

use crate::application::AssistedDraft;
use crate::domain::triage::{AnalysisResult, DraftSource, ExtractedFields, RelayStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/analyze` and `POST /api/draft/assist`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotesRequest {
    /// Missing notes read as empty; a non-string value is rejected.
    #[serde(default)]
    pub notes: String,
}

/// Body of `POST /api/draft`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub extracted_fields: Option<ExtractedFields>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftResponse {
    pub draft: String,
}

/// Analysis plus whichever draft the agent should start from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistResponse {
    pub analysis: AnalysisResult,
    pub draft: String,
    pub source: DraftSource,
    pub status: RelayStatus,
    pub status_message: String,
}

impl From<AssistedDraft> for AssistResponse {
    fn from(assisted: AssistedDraft) -> Self {
        Self {
            status_message: assisted.status.message(),
            analysis: assisted.analysis,
            draft: assisted.draft,
            source: assisted.source,
            status: assisted.status,
        }
    }
}
