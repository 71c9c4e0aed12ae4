//! HTTP handlers for triage endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::triage::{
    AnalyzeTicketCommand, AnalyzeTicketHandler, AssistDraftCommand, RequestDraftCommand,
    RequestDraftHandler,
};
use crate::domain::triage::TicketAnalyzer;
use crate::ports::DraftRelay;

use super::dto::{AssistResponse, DraftRequest, DraftResponse, HealthResponse, NotesRequest};
use crate::adapters::http::error::TriageApiError;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TriageAppState {
    pub analyzer: Arc<TicketAnalyzer>,
    pub relay: Arc<dyn DraftRelay>,
    pub relay_timeout: Duration,
}

impl TriageAppState {
    pub fn analyze_handler(&self) -> AnalyzeTicketHandler {
        AnalyzeTicketHandler::new(self.analyzer.clone())
    }

    pub fn draft_handler(&self) -> RequestDraftHandler {
        RequestDraftHandler::new(self.analyzer.clone(), self.relay.clone(), self.relay_timeout)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { ok: true })
}

/// POST /api/analyze - Run the local pipeline over pasted notes
pub async fn analyze_ticket(
    State(state): State<TriageAppState>,
    payload: Result<Json<NotesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TriageApiError> {
    let Json(request) = payload?;

    let result = state.analyze_handler().handle(AnalyzeTicketCommand {
        notes: request.notes,
    });

    Ok(Json(result))
}

/// POST /api/draft - Generated draft or an error
pub async fn request_draft(
    State(state): State<TriageAppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TriageApiError> {
    let Json(request) = payload?;

    let draft = state
        .draft_handler()
        .handle(RequestDraftCommand {
            notes: request.notes,
            extracted_fields: request.extracted_fields,
        })
        .await?;

    Ok(Json(DraftResponse { draft }))
}

/// POST /api/draft/assist - Analysis plus the best available draft
pub async fn assist_draft(
    State(state): State<TriageAppState>,
    payload: Result<Json<NotesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TriageApiError> {
    let Json(request) = payload?;

    let assisted = state
        .draft_handler()
        .assist(AssistDraftCommand {
            notes: request.notes,
        })
        .await?;

    Ok(Json(AssistResponse::from(assisted)))
}
