//! Editable draft lifecycle for one ticket.
//!
//! The workspace owns the notes, the latest analysis, and the draft the
//! agent will send. Each notes change or explicit re-analysis bumps the
//! revision; a relay draft is only accepted for the revision it was
//! requested against.

use serde::{Deserialize, Serialize};

use super::analyzer::{AnalysisResult, TicketAnalyzer};
use super::fields::ExtractedFields;

/// Where the current draft text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    /// Composed from the macro catalog.
    Local,
    /// Returned by the drafting relay.
    Relay,
    /// Typed or edited by the agent.
    Agent,
}

/// Progress of the most recent relay request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RelayStatus {
    Idle,
    Pending { revision: u64 },
    Applied { revision: u64 },
    Unavailable { reason: String },
}

impl RelayStatus {
    /// One-line status for the agent.
    pub fn message(&self) -> String {
        match self {
            RelayStatus::Idle => "Ready".to_string(),
            RelayStatus::Pending { .. } => "Generating draft...".to_string(),
            RelayStatus::Applied { .. } => "Draft generated".to_string(),
            RelayStatus::Unavailable { reason } => {
                format!("Draft unavailable ({reason}); using local draft")
            }
        }
    }
}

/// What a relay call needs, captured at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub revision: u64,
    pub notes: String,
    pub fields: ExtractedFields,
}

/// Result of handing a relay outcome back to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    Applied,
    Failed,
    /// The notes moved on after the request; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct TicketWorkspace {
    analyzer: TicketAnalyzer,
    notes: String,
    revision: u64,
    analysis: AnalysisResult,
    draft: String,
    draft_source: DraftSource,
    relay_status: RelayStatus,
}

impl TicketWorkspace {
    pub fn new(analyzer: TicketAnalyzer) -> Self {
        let analysis = analyzer.analyze("");
        let draft = analysis.draft.body.clone();
        Self {
            analyzer,
            notes: String::new(),
            revision: 0,
            analysis,
            draft,
            draft_source: DraftSource::Local,
            relay_status: RelayStatus::Idle,
        }
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn analysis(&self) -> &AnalysisResult {
        &self.analysis
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_source(&self) -> DraftSource {
        self.draft_source
    }

    pub fn relay_status(&self) -> &RelayStatus {
        &self.relay_status
    }

    /// Replaces the notes and refreshes fields and flags.
    ///
    /// An agent-edited draft is kept; any other draft is recomposed.
    pub fn update_notes(&mut self, raw: impl Into<String>) -> &AnalysisResult {
        self.notes = raw.into();
        self.revision += 1;
        self.analysis = self.analyzer.analyze(&self.notes);

        if self.draft_source != DraftSource::Agent {
            self.use_local_draft();
        }
        &self.analysis
    }

    /// Re-runs analysis and overwrites the draft, agent edits included.
    pub fn reanalyze(&mut self) -> &AnalysisResult {
        self.revision += 1;
        self.analysis = self.analyzer.analyze(&self.notes);
        self.use_local_draft();
        self.relay_status = RelayStatus::Idle;
        &self.analysis
    }

    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.draft_source = DraftSource::Agent;
    }

    /// Marks a relay request as in flight for the current revision.
    pub fn begin_relay(&mut self) -> RelayRequest {
        self.relay_status = RelayStatus::Pending {
            revision: self.revision,
        };
        RelayRequest {
            revision: self.revision,
            notes: self.notes.clone(),
            fields: self.analysis.fields.clone(),
        }
    }

    /// Accepts a relay draft if it was requested for the current revision.
    ///
    /// The agent asked for it, so it replaces agent edits too.
    pub fn apply_relay_draft(&mut self, revision: u64, draft: impl Into<String>) -> RelayOutcome {
        if revision != self.revision {
            return RelayOutcome::Stale;
        }
        self.draft = draft.into();
        self.draft_source = DraftSource::Relay;
        self.relay_status = RelayStatus::Applied { revision };
        RelayOutcome::Applied
    }

    /// Records a relay failure. The current draft stays in place.
    pub fn relay_failed(&mut self, revision: u64, reason: impl Into<String>) -> RelayOutcome {
        if revision != self.revision {
            return RelayOutcome::Stale;
        }
        self.relay_status = RelayStatus::Unavailable {
            reason: reason.into(),
        };
        RelayOutcome::Failed
    }

    fn use_local_draft(&mut self) {
        self.draft = self.analysis.draft.body.clone();
        self.draft_source = DraftSource::Local;
    }
}

impl Default for TicketWorkspace {
    fn default() -> Self {
        Self::new(TicketAnalyzer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFUND_NOTE: &str = "Guest Name: Ana Ruiz\nItinerary # H1234567\nGuest wants a refund";

    #[test]
    fn new_workspace_starts_with_local_draft() {
        let ws = TicketWorkspace::default();
        assert_eq!(ws.revision(), 0);
        assert_eq!(ws.draft_source(), DraftSource::Local);
        assert_eq!(ws.draft(), ws.analysis().draft.body);
        assert_eq!(ws.relay_status().message(), "Ready");
    }

    #[test]
    fn notes_update_recomposes_local_draft() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);

        assert_eq!(ws.revision(), 1);
        assert_eq!(ws.analysis().fields.itinerary, "H1234567");
        assert!(ws.draft().contains("Dear Ana Ruiz,"));
        assert_eq!(ws.draft_source(), DraftSource::Local);
    }

    #[test]
    fn agent_edit_survives_notes_update() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        ws.edit_draft("my own reply");

        ws.update_notes(format!("{REFUND_NOTE}\nchargeback filed"));

        assert_eq!(ws.draft(), "my own reply");
        assert_eq!(ws.draft_source(), DraftSource::Agent);
        assert_eq!(ws.analysis().fields.issue, "Chargeback / Dispute");
    }

    #[test]
    fn reanalyze_overwrites_agent_edit() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        ws.edit_draft("my own reply");

        ws.reanalyze();

        assert_eq!(ws.draft_source(), DraftSource::Local);
        assert_eq!(ws.draft(), ws.analysis().draft.body);
        assert_eq!(ws.revision(), 2);
    }

    #[test]
    fn relay_draft_applies_to_its_revision() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        let request = ws.begin_relay();
        assert_eq!(request.fields.guest_name, "Ana Ruiz");
        assert_eq!(ws.relay_status(), &RelayStatus::Pending { revision: 1 });

        let outcome = ws.apply_relay_draft(request.revision, "Generated reply");

        assert_eq!(outcome, RelayOutcome::Applied);
        assert_eq!(ws.draft(), "Generated reply");
        assert_eq!(ws.draft_source(), DraftSource::Relay);
        assert_eq!(ws.relay_status().message(), "Draft generated");
    }

    #[test]
    fn superseded_relay_draft_is_discarded() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        let request = ws.begin_relay();
        ws.update_notes("Guest asked about parking");

        let outcome = ws.apply_relay_draft(request.revision, "Generated reply");

        assert_eq!(outcome, RelayOutcome::Stale);
        assert_ne!(ws.draft(), "Generated reply");
        assert_eq!(ws.draft_source(), DraftSource::Local);
    }

    #[test]
    fn relay_draft_replaces_agent_edit() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        let request = ws.begin_relay();
        ws.edit_draft("typing while waiting");

        ws.apply_relay_draft(request.revision, "Generated reply");

        assert_eq!(ws.draft(), "Generated reply");
    }

    #[test]
    fn relay_failure_keeps_local_draft() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        let local = ws.draft().to_string();
        let request = ws.begin_relay();

        let outcome = ws.relay_failed(request.revision, "timed out");

        assert_eq!(outcome, RelayOutcome::Failed);
        assert_eq!(ws.draft(), local);
        assert_eq!(
            ws.relay_status().message(),
            "Draft unavailable (timed out); using local draft"
        );
    }

    #[test]
    fn stale_failure_does_not_touch_status() {
        let mut ws = TicketWorkspace::default();
        ws.update_notes(REFUND_NOTE);
        let request = ws.begin_relay();
        ws.reanalyze();

        assert_eq!(ws.relay_failed(request.revision, "boom"), RelayOutcome::Stale);
        assert_eq!(ws.relay_status(), &RelayStatus::Idle);
    }
}
