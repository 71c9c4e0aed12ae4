//! ProviderDraftRelay - drafts replies in-process through an AIProvider.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::triage::ExtractedFields;
use crate::ports::{AIProvider, CompletionRequest, DraftRelay, MessageRole, RelayError, RequestMetadata};

/// Reply policy sent as the system prompt on every drafting call.
pub const DRAFT_POLICY: &str = "You write email replies for a hotel reservation support desk. \
Write only the email body. \
Never confirm, approve, or promise a refund, credit, or cancellation. \
Never promise a date or timeline. \
If the notes mention a chargeback or dispute, explain that refund handling is locked while the dispute is open with the bank. \
When the guest name, itinerary, or hotel is unknown, keep the placeholders [Name], [ITIN], and [Hotel] exactly as written. \
Do not repeat card numbers, government IDs, email addresses, or phone numbers from the notes.";

pub struct ProviderDraftRelay {
    provider: Arc<dyn AIProvider>,
    max_tokens: u32,
    temperature: f32,
}

impl ProviderDraftRelay {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            max_tokens: 600,
            temperature: 0.3,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// User message: known fields first, then the notes verbatim.
    pub fn build_prompt(notes: &str, fields: &ExtractedFields) -> String {
        format!(
            "Known ticket fields:\n\
             Itinerary: {}\n\
             Guest name: {}\n\
             Hotel: {}\n\
             Issue: {}\n\
             Tags: {}\n\n\
             Ticket notes:\n{}",
            fields.itinerary,
            fields.guest_name,
            fields.hotel_name,
            fields.issue,
            fields.tags_joined(),
            notes.trim()
        )
    }
}

#[async_trait]
impl DraftRelay for ProviderDraftRelay {
    async fn generate_draft(
        &self,
        notes: &str,
        fields: &ExtractedFields,
    ) -> Result<String, RelayError> {
        let request = CompletionRequest::new(RequestMetadata::new(Uuid::new_v4().to_string()))
            .with_system_prompt(DRAFT_POLICY)
            .with_message(MessageRole::User, Self::build_prompt(notes, fields))
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = self.provider.complete(request).await?;

        debug!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Draft generated"
        );

        let draft = response.content.trim();
        if draft.is_empty() {
            return Err(RelayError::EmptyDraft);
        }
        Ok(draft.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::triage::analyze;

    const NOTE: &str = "Guest Name: JANE DOE\nItinerary # H7654321\nchargeback filed";

    #[tokio::test]
    async fn returns_trimmed_provider_output() {
        let provider = Arc::new(MockAIProvider::new().with_response("  Dear JANE DOE,\n...  \n"));
        let relay = ProviderDraftRelay::new(provider);

        let draft = relay
            .generate_draft(NOTE, &analyze(NOTE).fields)
            .await
            .unwrap();

        assert_eq!(draft, "Dear JANE DOE,\n...");
    }

    #[tokio::test]
    async fn sends_policy_and_fields() {
        let provider = Arc::new(MockAIProvider::new());
        let relay = ProviderDraftRelay::new(provider.clone()).with_max_tokens(200);

        relay.generate_draft(NOTE, &analyze(NOTE).fields).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt.as_deref(), Some(DRAFT_POLICY));
        assert_eq!(calls[0].max_tokens, Some(200));
        let prompt = &calls[0].messages[0].content;
        assert!(prompt.contains("Itinerary: H7654321"));
        assert!(prompt.contains("Issue: Chargeback / Dispute"));
        assert!(prompt.ends_with("chargeback filed"));
    }

    #[tokio::test]
    async fn blank_output_is_an_error() {
        let relay = ProviderDraftRelay::new(Arc::new(MockAIProvider::new().with_response("   ")));

        let err = relay
            .generate_draft(NOTE, &ExtractedFields::empty())
            .await
            .unwrap_err();

        assert_eq!(err, RelayError::EmptyDraft);
    }

    #[tokio::test]
    async fn provider_errors_become_relay_errors() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let relay = ProviderDraftRelay::new(Arc::new(provider));

        let err = relay
            .generate_draft(NOTE, &ExtractedFields::empty())
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Provider(_)));
    }

    #[test]
    fn prompt_marks_missing_fields_with_sentinel() {
        let prompt = ProviderDraftRelay::build_prompt("hello", &ExtractedFields::empty());
        assert!(prompt.contains("Guest name: -"));
        assert!(prompt.contains("Tags: -"));
    }
}
