//! DraftRelay port - generated reply prose from a hosted language model.
//!
//! The relay receives the raw notes and the locally extracted fields and
//! returns a draft. Every failure is recoverable: callers fall back to the
//! locally composed macro.

use async_trait::async_trait;

use crate::domain::triage::ExtractedFields;
use crate::ports::AIError;

#[async_trait]
pub trait DraftRelay: Send + Sync {
    /// Returns trimmed, non-empty draft prose.
    async fn generate_draft(
        &self,
        notes: &str,
        fields: &ExtractedFields,
    ) -> Result<String, RelayError>;
}

/// Why a generated draft is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("drafting is not configured")]
    NotConfigured,

    #[error("relay returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed relay response: {0}")]
    Malformed(String),

    #[error("relay request failed: {0}")]
    Transport(String),

    #[error("relay timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("relay returned an empty draft")]
    EmptyDraft,

    #[error("provider error: {0}")]
    Provider(String),
}

impl RelayError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

impl From<AIError> for RelayError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::Timeout { timeout_secs } => Self::Timeout {
                timeout_secs: u64::from(timeout_secs),
            },
            other => Self::Provider(other.to_string()),
        }
    }
}
