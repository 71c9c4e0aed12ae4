//! Triage command handlers.

mod analyze_ticket;
mod request_draft;

pub use analyze_ticket::{AnalyzeTicketCommand, AnalyzeTicketHandler};
pub use request_draft::{
    AssistDraftCommand, AssistedDraft, RequestDraftCommand, RequestDraftHandler,
};
