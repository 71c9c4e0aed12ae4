//! Issue classification as a priority-ordered rule table.
//!
//! The first rule whose predicate holds decides the label. Compound rules sit
//! above their constituents so the narrower diagnosis wins, and chargebacks
//! sit above everything because an open dispute locks refund handling.
//! Reordering this table silently changes triage outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::KeywordSignals;

/// Canonical issue labels shown to agents and stored in records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueLabel {
    #[serde(rename = "Chargeback / Dispute")]
    ChargebackDispute,
    #[serde(rename = "Refund Request / Booking Issue")]
    RefundWithBookingIssue,
    #[serde(rename = "Refund Request")]
    RefundRequest,
    #[serde(rename = "Call Review / Amenity Complaint")]
    CallReviewWithAmenity,
    #[serde(rename = "Call Recording / Review")]
    CallReview,
    #[serde(rename = "Amenity Complaint")]
    AmenityComplaint,
    #[serde(rename = "Booking / Room Issue")]
    BookingIssue,
    #[serde(rename = "VC Issue / Hotel Needs Payment")]
    HotelPayment,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl IssueLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueLabel::ChargebackDispute => "Chargeback / Dispute",
            IssueLabel::RefundWithBookingIssue => "Refund Request / Booking Issue",
            IssueLabel::RefundRequest => "Refund Request",
            IssueLabel::CallReviewWithAmenity => "Call Review / Amenity Complaint",
            IssueLabel::CallReview => "Call Recording / Review",
            IssueLabel::AmenityComplaint => "Amenity Complaint",
            IssueLabel::BookingIssue => "Booking / Room Issue",
            IssueLabel::HotelPayment => "VC Issue / Hotel Needs Payment",
            IssueLabel::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for IssueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the decision table.
pub struct IssueRule {
    pub label: IssueLabel,
    pub matches: fn(&KeywordSignals) -> bool,
}

/// Highest priority first.
pub const ISSUE_RULES: &[IssueRule] = &[
    IssueRule {
        label: IssueLabel::ChargebackDispute,
        matches: |s| s.chargeback,
    },
    IssueRule {
        label: IssueLabel::RefundWithBookingIssue,
        matches: |s| s.refund && s.booking_issue,
    },
    IssueRule {
        label: IssueLabel::RefundRequest,
        matches: |s| s.refund,
    },
    IssueRule {
        label: IssueLabel::CallReviewWithAmenity,
        matches: |s| s.call_review && s.amenity,
    },
    IssueRule {
        label: IssueLabel::CallReview,
        matches: |s| s.call_review,
    },
    IssueRule {
        label: IssueLabel::AmenityComplaint,
        matches: |s| s.amenity,
    },
    IssueRule {
        label: IssueLabel::BookingIssue,
        matches: |s| s.booking_issue,
    },
    IssueRule {
        label: IssueLabel::HotelPayment,
        matches: |s| s.hotel_payment,
    },
    IssueRule {
        label: IssueLabel::GeneralInquiry,
        matches: |s| s.has_text,
    },
];

/// Returns the label of the first matching rule, or `None` for empty text.
pub fn classify(signals: &KeywordSignals) -> Option<IssueLabel> {
    ISSUE_RULES
        .iter()
        .find(|rule| (rule.matches)(signals))
        .map(|rule| rule.label)
}
