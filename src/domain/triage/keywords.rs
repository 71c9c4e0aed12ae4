//! Keyword predicates computed once per analysis.
//!
//! The classifier and the tag extractor both read these signals, so each
//! keyword family is matched exactly once against the lowercased text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiles a built-in pattern. Patterns are string literals in this crate.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in triage pattern")
}

static CHARGEBACK: Lazy<Regex> =
    Lazy::new(|| compile(r"\bcharge[\s-]?backs?\b|\bdisput(?:e|es|ed|ing)\b"));

static REFUND: Lazy<Regex> = Lazy::new(|| {
    compile(r"\brefund(?:s|ed|ing)?\b|\breimburs(?:e|ed|ement)\b|\bmoney\s+back\b")
});

static BOOKING_ISSUE: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"\bcancel(?:s|ed|led|ing|ling|lation|lations)?\b",
        r"|\bmodif(?:y|ied|ication)\b",
        r"|\bdate\s+change\b|\bchange\b.*\bdates?\b",
        r"|\bno[\s-]?show\b|\bno\s+rooms?\b|\bno\s+reservation\b",
        r"|\breservation\s+(?:was\s+)?not\s+found\b",
        r"|\bcould\s*(?:n't|not)\s+find\s+(?:the\s+|my\s+|our\s+|a\s+|their\s+)?(?:reservation|booking)\b",
        r"|\boverbook(?:ed|ing)?\b|\bwalked\b",
        r"|\bwrong\s+(?:room|dates?|hotel|bed)\b",
        r"|\broom\s+(?:was\s+|is\s+)?(?:not\s+ready|not\s+available|unavailable|dirty)\b",
        r"|\bdouble[\s-]?(?:booked|booking|charged)\b",
        r"|\bearly\s+check[\s-]?out\b",
    ))
});

static AMENITY: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"\bamenit(?:y|ies)\b|\bbreakfast\b|\bparking\b|\bwi-?fi\b|\binternet\b",
        r"|\bpool\b|\bshuttle\b|\bresort\s+fees?\b|\bgym\b|\bfitness\s+cent(?:er|re)\b",
        r"|\bspa\b|\bhot\s+tub\b|\bjacuzzi\b|\bair\s*condition(?:ing|er)?\b|\bhousekeeping\b",
    ))
});

static CALL_REVIEW: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"\bcall\s+review\b|\bcall\s+record(?:s|ed|ing|ings)?\b",
        r"|\brecordings?\b|\brecorded\s+(?:call|line)\b",
        r"|\bcall\b.*\brecord(?:ed|ing)?\b",
        r"|\breview\s+(?:the|my|our)\s+call\b|\blisten\s+to\s+the\s+call\b",
        r"|\bno\s+record\s+of\s+(?:the|a|my|any)\s+call\b",
    ))
});

static ESCALATION: Lazy<Regex> = Lazy::new(|| {
    compile(r"\bmanagers?\b|\bsupervisors?\b|\bescalat(?:e|ed|es|ing|ion|ions)\b")
});

static NON_REFUNDABLE: Lazy<Regex> =
    Lazy::new(|| compile(r"\bnon[\s-]?refundable\b|\bnrf\b"));

/// North American phone numbers with optional country code and separators.
pub(crate) static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?:\+?1[\s.-]?)?(?:\(\d{3}\)|\b\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b")
});

static HOTEL_PAYMENT: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"\bvirtual\s+card\b|\bvc\b|\bdeclined\s+card\b",
        r"|\bcard\s+(?:was\s+|is\s+)?declin(?:ed|ing)\b",
        r"|\bhotel\s+needs\s+payment\b",
        r"|\bhotel\s+(?:was\s+|is\s+|has\s+)?not\s+(?:been\s+)?paid\b",
    ))
});

/// Boolean keyword clusters detected in one note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordSignals {
    pub has_text: bool,
    pub chargeback: bool,
    pub refund: bool,
    pub booking_issue: bool,
    pub amenity: bool,
    pub call_review: bool,
    pub escalation: bool,
    pub non_refundable: bool,
    pub phone_number: bool,
    pub hotel_payment: bool,
}

impl KeywordSignals {
    /// Matches every keyword family against normalized text.
    pub fn detect(normalized: &str) -> Self {
        let lower = normalized.to_lowercase();

        Self {
            has_text: !lower.trim().is_empty(),
            chargeback: CHARGEBACK.is_match(&lower),
            refund: REFUND.is_match(&lower),
            booking_issue: BOOKING_ISSUE.is_match(&lower),
            amenity: AMENITY.is_match(&lower),
            call_review: CALL_REVIEW.is_match(&lower),
            escalation: ESCALATION.is_match(&lower),
            non_refundable: NON_REFUNDABLE.is_match(&lower),
            phone_number: PHONE_NUMBER.is_match(&lower),
            hotel_payment: HOTEL_PAYMENT.is_match(&lower),
        }
    }
}
