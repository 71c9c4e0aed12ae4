//! RequestDraftHandler - generated reply drafts with a local fallback.
//!
//! `handle` is the strict relay call behind `/api/draft`: any relay failure
//! is returned to the caller. `assist` never fails on relay errors; it runs
//! the local pipeline, asks the relay, and keeps the local macro when the
//! relay is unavailable, reporting why in the status.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

use crate::application::TriageError;
use crate::domain::triage::{
    AnalysisResult, DraftSource, ExtractedFields, RelayStatus, TicketAnalyzer, TicketWorkspace,
};
use crate::ports::{DraftRelay, RelayError};

/// Notes plus optional client-side fields; missing fields are re-extracted.
#[derive(Debug, Clone)]
pub struct RequestDraftCommand {
    pub notes: String,
    pub extracted_fields: Option<ExtractedFields>,
}

#[derive(Debug, Clone)]
pub struct AssistDraftCommand {
    pub notes: String,
}

/// Outcome of an assisted draft: the analysis and whichever draft won.
#[derive(Debug, Clone)]
pub struct AssistedDraft {
    pub analysis: AnalysisResult,
    pub draft: String,
    pub source: DraftSource,
    pub status: RelayStatus,
}

pub struct RequestDraftHandler {
    analyzer: Arc<TicketAnalyzer>,
    relay: Arc<dyn DraftRelay>,
    timeout: Duration,
}

impl RequestDraftHandler {
    pub fn new(
        analyzer: Arc<TicketAnalyzer>,
        relay: Arc<dyn DraftRelay>,
        timeout: Duration,
    ) -> Self {
        Self {
            analyzer,
            relay,
            timeout,
        }
    }

    pub async fn handle(&self, cmd: RequestDraftCommand) -> Result<String, TriageError> {
        TriageError::require_notes(&cmd.notes)?;

        let fields = match cmd.extracted_fields {
            Some(fields) => fields,
            None => self.analyzer.analyze(&cmd.notes).fields,
        };

        Ok(self.generate(&cmd.notes, &fields).await?)
    }

    pub async fn assist(&self, cmd: AssistDraftCommand) -> Result<AssistedDraft, TriageError> {
        TriageError::require_notes(&cmd.notes)?;

        let mut workspace = TicketWorkspace::new(self.analyzer.as_ref().clone());
        workspace.update_notes(cmd.notes);
        let request = workspace.begin_relay();

        match self.generate(&request.notes, &request.fields).await {
            Ok(draft) => {
                workspace.apply_relay_draft(request.revision, draft);
            }
            Err(err) => {
                warn!(
                    error = %err,
                    macro_key = %workspace.analysis().draft.macro_key,
                    "Draft relay unavailable, using local draft"
                );
                workspace.relay_failed(request.revision, err.to_string());
            }
        }

        Ok(AssistedDraft {
            analysis: workspace.analysis().clone(),
            draft: workspace.draft().to_string(),
            source: workspace.draft_source(),
            status: workspace.relay_status().clone(),
        })
    }

    async fn generate(&self, notes: &str, fields: &ExtractedFields) -> Result<String, RelayError> {
        timeout(self.timeout, self.relay.generate_draft(notes, fields))
            .await
            .map_err(|_| RelayError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const NOTE: &str = "Guest Name: Ana Ruiz\nItinerary # H1234567\nGuest wants a refund";

    struct StubRelay {
        result: Result<String, RelayError>,
        delay: Duration,
        seen: Mutex<Vec<ExtractedFields>>,
    }

    impl StubRelay {
        fn ok(draft: &str) -> Self {
            Self {
                result: Ok(draft.to_string()),
                delay: Duration::ZERO,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: RelayError) -> Self {
            Self {
                result: Err(err),
                delay: Duration::ZERO,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::ok("too late")
            }
        }
    }

    #[async_trait]
    impl DraftRelay for StubRelay {
        async fn generate_draft(
            &self,
            _notes: &str,
            fields: &ExtractedFields,
        ) -> Result<String, RelayError> {
            self.seen.lock().unwrap().push(fields.clone());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.result.clone()
        }
    }

    fn handler(relay: Arc<StubRelay>) -> RequestDraftHandler {
        RequestDraftHandler::new(
            Arc::new(TicketAnalyzer::default()),
            relay,
            Duration::from_millis(200),
        )
    }

    fn draft_cmd(notes: &str) -> RequestDraftCommand {
        RequestDraftCommand {
            notes: notes.to_string(),
            extracted_fields: None,
        }
    }

    #[tokio::test]
    async fn handle_returns_relay_draft() {
        let relay = Arc::new(StubRelay::ok("Generated reply"));
        let draft = handler(relay.clone()).handle(draft_cmd(NOTE)).await.unwrap();

        assert_eq!(draft, "Generated reply");
        assert_eq!(relay.seen.lock().unwrap()[0].itinerary, "H1234567");
    }

    #[tokio::test]
    async fn handle_prefers_supplied_fields() {
        let relay = Arc::new(StubRelay::ok("ok"));
        let mut fields = ExtractedFields::empty();
        fields.guest_name = "Edited Name".to_string();

        handler(relay.clone())
            .handle(RequestDraftCommand {
                notes: NOTE.to_string(),
                extracted_fields: Some(fields),
            })
            .await
            .unwrap();

        assert_eq!(relay.seen.lock().unwrap()[0].guest_name, "Edited Name");
    }

    #[tokio::test]
    async fn handle_rejects_blank_notes() {
        let relay = Arc::new(StubRelay::ok("unused"));
        let err = handler(relay.clone()).handle(draft_cmd("   ")).await.unwrap_err();

        assert_eq!(err, TriageError::EmptyNotes);
        assert!(relay.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn handle_surfaces_relay_errors() {
        let relay = Arc::new(StubRelay::failing(RelayError::status(500, "boom")));
        let err = handler(relay).handle(draft_cmd(NOTE)).await.unwrap_err();

        assert_eq!(err, TriageError::Relay(RelayError::status(500, "boom")));
    }

    #[tokio::test]
    async fn handle_times_out() {
        let relay = Arc::new(StubRelay::slow(Duration::from_secs(5)));
        let err = handler(relay).handle(draft_cmd(NOTE)).await.unwrap_err();

        assert!(matches!(err, TriageError::Relay(RelayError::Timeout { .. })));
    }

    #[tokio::test]
    async fn assist_uses_relay_draft() {
        let relay = Arc::new(StubRelay::ok("Generated reply"));
        let assisted = handler(relay)
            .assist(AssistDraftCommand {
                notes: NOTE.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(assisted.draft, "Generated reply");
        assert_eq!(assisted.source, DraftSource::Relay);
        assert_eq!(assisted.status.message(), "Draft generated");
        assert_eq!(assisted.analysis.fields.guest_name, "Ana Ruiz");
    }

    #[tokio::test]
    async fn assist_falls_back_to_local_draft() {
        let relay = Arc::new(StubRelay::failing(RelayError::NotConfigured));
        let assisted = handler(relay)
            .assist(AssistDraftCommand {
                notes: NOTE.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(assisted.source, DraftSource::Local);
        assert_eq!(assisted.draft, assisted.analysis.draft.body);
        assert_eq!(
            assisted.status.message(),
            "Draft unavailable (drafting is not configured); using local draft"
        );
    }

    #[tokio::test]
    async fn assist_falls_back_on_timeout() {
        let relay = Arc::new(StubRelay::slow(Duration::from_secs(5)));
        let assisted = handler(relay)
            .assist(AssistDraftCommand {
                notes: NOTE.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(assisted.source, DraftSource::Local);
        assert!(matches!(assisted.status, RelayStatus::Unavailable { .. }));
    }
}
