//! Application-level errors for triage and record handlers.

use crate::domain::foundation::RecordId;
use crate::ports::{RelayError, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    #[error("Missing notes")]
    EmptyNotes,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("record not found: {0}")]
    RecordNotFound(RecordId),
}

impl TriageError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Rejects notes that are empty after trimming.
    pub fn require_notes(notes: &str) -> Result<(), Self> {
        if notes.trim().is_empty() {
            return Err(Self::EmptyNotes);
        }
        Ok(())
    }
}
