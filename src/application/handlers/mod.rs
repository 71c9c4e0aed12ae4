//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod records;
pub mod triage;

pub use records::{
    ClearRecordsHandler, DeleteRecordCommand, DeleteRecordHandler, ListRecordsHandler,
    SaveRecordCommand, SaveRecordHandler,
};
pub use triage::{
    AnalyzeTicketCommand, AnalyzeTicketHandler, AssistDraftCommand, AssistedDraft,
    RequestDraftCommand, RequestDraftHandler,
};
