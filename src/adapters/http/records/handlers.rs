//! HTTP handlers for the saved-record cache.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::TriageApiError;
use crate::application::handlers::records::{
    ClearRecordsHandler, DeleteRecordCommand, DeleteRecordHandler, ListRecordsHandler,
    SaveRecordCommand, SaveRecordHandler,
};
use crate::application::TriageError;
use crate::domain::foundation::{RecordId, ValidationError};
use crate::domain::triage::TicketAnalyzer;
use crate::ports::RecordStore;

use super::dto::{RecordListResponse, SaveRecordRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RecordsAppState {
    pub analyzer: Arc<TicketAnalyzer>,
    pub store: Arc<dyn RecordStore>,
    pub raw_text_limit: usize,
}

impl RecordsAppState {
    pub fn save_handler(&self) -> SaveRecordHandler {
        SaveRecordHandler::new(self.analyzer.clone(), self.store.clone(), self.raw_text_limit)
    }

    pub fn list_handler(&self) -> ListRecordsHandler {
        ListRecordsHandler::new(self.store.clone())
    }

    pub fn delete_handler(&self) -> DeleteRecordHandler {
        DeleteRecordHandler::new(self.store.clone())
    }

    pub fn clear_handler(&self) -> ClearRecordsHandler {
        ClearRecordsHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/records - Saved records, newest first
pub async fn list_records(
    State(state): State<RecordsAppState>,
) -> Result<impl IntoResponse, TriageApiError> {
    let records = state.list_handler().handle().await?;
    Ok(Json(RecordListResponse::from(records)))
}

/// POST /api/records - Analyze and save a ticket
pub async fn save_record(
    State(state): State<RecordsAppState>,
    payload: Result<Json<SaveRecordRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TriageApiError> {
    let Json(request) = payload?;

    let record = state
        .save_handler()
        .handle(SaveRecordCommand {
            notes: request.notes,
            draft_reply: request.draft_reply,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/records/:id
pub async fn delete_record(
    State(state): State<RecordsAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TriageApiError> {
    let id: RecordId = id
        .parse()
        .map_err(|e: ValidationError| TriageError::invalid_request(e.to_string()))?;

    state.delete_handler().handle(DeleteRecordCommand { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/records - Clear the cache
pub async fn clear_records(
    State(state): State<RecordsAppState>,
) -> Result<impl IntoResponse, TriageApiError> {
    state.clear_handler().handle().await?;
    Ok(StatusCode::NO_CONTENT)
}
