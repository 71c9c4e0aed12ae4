//! The triage pipeline: normalize once, extract, detect, classify, compose.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::{classify, IssueLabel};
use super::composer::{compose_draft, ComposedDraft, MacroCatalog};
use super::extractors::{extract_guest_name, extract_hotel_name, extract_itinerary, extract_tags};
use super::fields::{absent, ExtractedFields};
use super::keywords::KeywordSignals;
use super::normalizer::normalize;
use super::risk_flags::{detect_risk_flags, RiskFlag};

/// Everything one analysis produces. A fresh value per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub fields: ExtractedFields,
    pub flags: Vec<RiskFlag>,
    pub issue: Option<IssueLabel>,
    pub draft: ComposedDraft,
}

impl AnalysisResult {
    pub fn has_high_risk(&self) -> bool {
        self.flags.iter().any(RiskFlag::is_high)
    }
}

/// Runs the pipeline against a macro catalog.
///
/// Holds no mutable state; one analyzer can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct TicketAnalyzer {
    catalog: MacroCatalog,
}

impl TicketAnalyzer {
    pub fn new(catalog: MacroCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MacroCatalog {
        &self.catalog
    }

    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        let text = normalize(raw);
        let signals = KeywordSignals::detect(&text);
        let issue = classify(&signals);

        let fields = ExtractedFields {
            itinerary: extract_itinerary(&text),
            guest_name: extract_guest_name(&text),
            hotel_name: extract_hotel_name(&text),
            issue: issue.map(|label| label.to_string()).unwrap_or_else(absent),
            tags: extract_tags(&signals),
        };
        let flags = detect_risk_flags(&text);
        let draft = compose_draft(&fields, issue, &self.catalog);

        debug!(
            issue = %fields.issue,
            macro_key = %draft.macro_key,
            has_itinerary = fields.has_itinerary(),
            has_guest_name = fields.has_guest_name(),
            has_hotel_name = fields.has_hotel_name(),
            tags = %fields.tags_joined(),
            flag_count = flags.len(),
            "Ticket analyzed"
        );

        AnalysisResult {
            fields,
            flags,
            issue,
            draft,
        }
    }
}

static STANDARD_ANALYZER: Lazy<TicketAnalyzer> = Lazy::new(TicketAnalyzer::default);

/// Analyzes `raw` with the standard macro catalog.
pub fn analyze(raw: &str) -> AnalysisResult {
    STANDARD_ANALYZER.analyze(raw)
}
