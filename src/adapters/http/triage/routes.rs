//! Axum router configuration for triage endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_ticket, assist_draft, health, request_draft, TriageAppState};

/// Create the triage router.
///
/// # Routes
/// - `GET /health` - Liveness probe
/// - `POST /api/analyze` - Fields, flags, issue, and local draft
/// - `POST /api/draft` - Generated draft via the relay
/// - `POST /api/draft/assist` - Analysis plus relay draft with local fallback
pub fn triage_router() -> Router<TriageAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze_ticket))
        .route("/api/draft", post(request_draft))
        .route("/api/draft/assist", post(assist_draft))
}
