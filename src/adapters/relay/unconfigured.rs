use async_trait::async_trait;

use crate::domain::triage::ExtractedFields;
use crate::ports::{DraftRelay, RelayError};

/// Stand-in relay when no API key or relay URL is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredRelay;

#[async_trait]
impl DraftRelay for UnconfiguredRelay {
    async fn generate_draft(
        &self,
        _notes: &str,
        _fields: &ExtractedFields,
    ) -> Result<String, RelayError> {
        Err(RelayError::NotConfigured)
    }
}
