//! AnalyzeTicketHandler - runs the local triage pipeline over pasted notes.

use std::sync::Arc;

use crate::domain::triage::{AnalysisResult, TicketAnalyzer};

#[derive(Debug, Clone)]
pub struct AnalyzeTicketCommand {
    pub notes: String,
}

pub struct AnalyzeTicketHandler {
    analyzer: Arc<TicketAnalyzer>,
}

impl AnalyzeTicketHandler {
    pub fn new(analyzer: Arc<TicketAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Never fails: empty notes analyze to sentinels and the general macro.
    pub fn handle(&self, cmd: AnalyzeTicketCommand) -> AnalysisResult {
        self.analyzer.analyze(&cmd.notes)
    }
}
