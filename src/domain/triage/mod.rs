//! Ticket triage engine.
//!
//! Turns pasted ticket notes into structured fields, risk flags, an issue
//! label, and a composed reply draft. Everything here is synchronous and
//! free of I/O.
//!
//! # Module Organization
//!
//! - `normalizer` - Canonical text form shared by every stage
//! - `keywords` - Keyword predicates computed once per analysis
//! - `extractors` - Itinerary, guest, hotel, and tag extraction
//! - `risk_flags` - Risk pattern catalog
//! - `classifier` - Priority-ordered issue rules
//! - `composer` - Macro catalog and placeholder filling
//! - `analyzer` - The pipeline and its result type
//! - `workspace` - Editable draft lifecycle

mod analyzer;
mod classifier;
mod composer;
mod extractors;
mod fields;
mod keywords;
mod normalizer;
mod risk_flags;
mod workspace;

pub use analyzer::{analyze, AnalysisResult, TicketAnalyzer};
pub use classifier::{classify, IssueLabel, IssueRule, ISSUE_RULES};
pub use composer::{
    compose_draft, ComposedDraft, MacroCatalog, MacroTemplate, HOTEL_PLACEHOLDER,
    ITINERARY_PLACEHOLDER, NAME_PLACEHOLDER,
};
pub use extractors::{
    extract_guest_name, extract_hotel_name, extract_itinerary, extract_tags, guest_from_label,
    guest_from_salutation, guest_from_short_line, hotel_from_label, hotel_from_preposition,
    itinerary_from_bare_code, itinerary_from_label,
};
pub use fields::{absent, is_present, ExtractedFields, Tag, ABSENT};
pub use keywords::KeywordSignals;
pub use normalizer::normalize;
pub use risk_flags::{detect_risk_flags, RiskFlag, Severity, RISK_FLAG_ORDER};
pub use workspace::{DraftSource, RelayOutcome, RelayRequest, RelayStatus, TicketWorkspace};
