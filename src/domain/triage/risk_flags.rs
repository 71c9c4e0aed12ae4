//! Risk flag detection.
//!
//! A fixed catalog of patterns, evaluated top to bottom against the
//! lowercased normalized text. High-severity rules come first so the flag
//! list reads most-dangerous-first. A key is emitted at most once; when two
//! rows share a key the first one to match supplies the wording.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::{compile, PHONE_NUMBER};

/// Display weight of a flag. Only drives styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Med,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Med => "med",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A warning shown next to the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub key: String,
    pub label: String,
    pub detail: String,
    pub severity: Severity,
}

impl RiskFlag {
    pub fn is_high(&self) -> bool {
        self.severity == Severity::High
    }
}

/// Flag keys in evaluation order.
pub const RISK_FLAG_ORDER: [&str; 15] = [
    "refund_promise",
    "no_cancel",
    "chargeback",
    "non_refundable",
    "card_data",
    "government_id",
    "legal_threat",
    "hostile_tone",
    "escalation",
    "recording",
    "refund",
    "cancellation",
    "disconnect",
    "email",
    "phone",
];

struct RiskRule {
    key: &'static str,
    label: &'static str,
    detail: &'static str,
    severity: Severity,
    pattern: Regex,
}

impl RiskRule {
    fn new(
        key: &'static str,
        label: &'static str,
        detail: &'static str,
        severity: Severity,
        pattern: &str,
    ) -> Self {
        Self {
            key,
            label,
            detail,
            severity,
            pattern: compile(pattern),
        }
    }

    fn to_flag(&self) -> RiskFlag {
        RiskFlag {
            key: self.key.to_string(),
            label: self.label.to_string(),
            detail: self.detail.to_string(),
            severity: self.severity,
        }
    }
}

const REDACT: &str = "Remove/redact before saving/exporting";
const HANDLE_WITH_CARE: &str = "Be careful copying/exporting";

static RISK_RULES: Lazy<Vec<RiskRule>> = Lazy::new(|| {
    use Severity::*;

    vec![
        // Only completed or confirmed refunds count; a request is not a promise.
        RiskRule::new(
            "refund_promise",
            "Refund promise risk",
            "Avoid confirming a refund unless proven",
            High,
            concat!(
                r"\brefunds?\s+(?:is|was|has\s+been|have\s+been|will\s+be|is\s+being)\s+",
                r"(?:processed|approved|issued|completed|confirmed|sent|initiated)\b",
                r"|\byou\s+will\s+(?:receive|get)\s+(?:a|your)\s+(?:full\s+)?refund\b",
                r"|\bwe(?:\s+have|'ve)\s+(?:issued|processed|approved)\s+(?:a|your|the)\s+(?:full\s+)?refund\b",
                r"|\bwe\s+will\s+refund\b|\bwill\s+be\s+refunded\b|\bhas\s+been\s+refunded\b",
                r"|\bguaranteed?\s+(?:a\s+)?refund\b",
                r"|\bpromis\w*\s+(?:(?:a|the|your|full)\s+)?refund",
                r"|\b(?:we|i)\s+(?:have\s+)?(?:processed|issued|approved)\s+(?:a|your|the)\s+(?:full\s+)?refund\b",
                r"|\brefunds?\s+(?:processed|approved|issued|sent|completed)\b",
                r"|\b(?:i|we)\s+will\s+refund\b|\b(?:we\s+are|we['’]re)\s+refunding\b",
            ),
        ),
        RiskRule::new(
            "no_cancel",
            "Guest said: DO NOT cancel",
            "High risk if reservation is canceled",
            High,
            concat!(
                r"\b(?:don['’]?t|doesn['’]?t|do\s+not|does\s+not|never)\s+",
                r"(?:want\s+(?:to\s+|it\s+|(?:the|my|our|this|his|her|their)\s+\w+\s+)?)?cancel\w*",
                r"|\bnot\s+want\s+(?:to\s+|it\s+|(?:the|my|our|this|his|her|their)\s+\w+\s+)?cancel\w*",
                r"|\bkeep\s+(?:my|the|our)\s+reservation\b",
            ),
        ),
        RiskRule::new(
            "chargeback",
            "Chargeback / Dispute",
            "Use chargeback-safe language",
            High,
            r"\bcharge[\s-]?backs?\b|\bdisput(?:e|es|ed|ing)\b",
        ),
        RiskRule::new(
            "non_refundable",
            "Non-refundable mentioned",
            "Avoid promises; follow policy",
            High,
            r"\bnon[\s-]?refundable\b|\bnrf\b",
        ),
        // Digit runs only; no checksum.
        RiskRule::new(
            "card_data",
            "Possible card number detected",
            REDACT,
            High,
            r"\b(?:\d[ -]?){12,18}\d\b",
        ),
        RiskRule::new(
            "government_id",
            "Possible SSN detected",
            REDACT,
            High,
            r"\b\d{3}-\d{2}-\d{4}\b",
        ),
        RiskRule::new(
            "government_id",
            "Possible government ID detected",
            REDACT,
            High,
            r"\b(?:ssn|social\s+security|passport|driver'?s?\s+licen[cs]e)\b[^\n]{0,20}\d{5,}",
        ),
        RiskRule::new(
            "legal_threat",
            "Legal or regulatory threat",
            "Follow escalation policy; avoid admissions",
            High,
            concat!(
                r"\b(?:attorneys?|lawyers?|lawsuit|legal\s+action|sue|suing|small\s+claims|court",
                r"|bbb|better\s+business\s+bureau|ftc|attorney\s+general|consumer\s+protection)\b",
            ),
        ),
        RiskRule::new(
            "hostile_tone",
            "Hostile tone",
            "Keep replies neutral and factual",
            Med,
            concat!(
                r"\b(?:scam|scammers?|scammed|ripped\s+off|rip[\s-]?off|liars?|lying|thie(?:f|ves)",
                r"|stole|stealing|ridiculous|unacceptable|disgusting|incompetent|furious)\b",
            ),
        ),
        RiskRule::new(
            "escalation",
            "Escalation requested",
            "Confirm the escalation path before promising a callback",
            Med,
            r"\bmanagers?\b|\bsupervisors?\b|\bescalat(?:e|ed|es|ing|ion|ions)\b",
        ),
        RiskRule::new(
            "recording",
            "Call recording / review requested",
            "May require verification steps",
            Med,
            r"\bcall\s+review\b|\brecordings?\b|\bno\s+record\b|\bcall\s+record(?:s|ed|ing)?\b",
        ),
        RiskRule::new(
            "refund",
            "Refund mentioned",
            "Check eligibility before discussing amounts",
            Med,
            r"\brefund(?:s|ed|ing)?\b|\breimburs(?:e|ed|ement)\b",
        ),
        RiskRule::new(
            "cancellation",
            "Cancellation mentioned",
            "Verify approval & policy before actions",
            Med,
            r"\bcancel(?:l?ed|lations?|l?ing)\b",
        ),
        RiskRule::new(
            "disconnect",
            "Call disconnected",
            "Note callback details before closing",
            Low,
            r"\bhung\s+up\b|\bdisconnect(?:ed|ion)?\b|\bcall\s+dropped\b|\bdropped\s+(?:the\s+)?call\b",
        ),
        RiskRule::new(
            "email",
            "Email detected",
            HANDLE_WITH_CARE,
            Med,
            r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}",
        ),
    ]
});

/// Detects risk flags in normalized text.
///
/// Output follows [`RISK_FLAG_ORDER`] and never repeats a key.
pub fn detect_risk_flags(normalized: &str) -> Vec<RiskFlag> {
    let lower = normalized.to_lowercase();
    let mut flags: Vec<RiskFlag> = Vec::new();

    let mut add = |flag: RiskFlag| {
        if !flags.iter().any(|existing| existing.key == flag.key) {
            flags.push(flag);
        }
    };

    for rule in RISK_RULES.iter() {
        if rule.pattern.is_match(&lower) {
            add(rule.to_flag());
        }
    }

    if PHONE_NUMBER.is_match(&lower) {
        add(RiskFlag {
            key: "phone".to_string(),
            label: "Phone number detected".to_string(),
            detail: HANDLE_WITH_CARE.to_string(),
            severity: Severity::Med,
        });
    }

    flags
}
