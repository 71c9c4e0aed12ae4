//! Extracted ticket fields and their absence sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder every extractor emits when a field is not found.
pub const ABSENT: &str = "-";

/// Returns the sentinel as an owned string.
pub fn absent() -> String {
    ABSENT.to_string()
}

/// Returns true when a field value carries real data.
pub fn is_present(value: &str) -> bool {
    value != ABSENT && !value.trim().is_empty()
}

/// Boolean keyword tags attached to a ticket, in their fixed check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Refund,
    Chargeback,
    CallReview,
    Escalation,
    NonRefundable,
    PhoneNumber,
}

impl Tag {
    /// Every tag in evaluation order.
    pub const ALL: [Tag; 6] = [
        Tag::Refund,
        Tag::Chargeback,
        Tag::CallReview,
        Tag::Escalation,
        Tag::NonRefundable,
        Tag::PhoneNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Refund => "refund",
            Tag::Chargeback => "chargeback",
            Tag::CallReview => "call-review",
            Tag::Escalation => "escalation",
            Tag::NonRefundable => "non-refundable",
            Tag::PhoneNumber => "phone-number",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured fields pulled out of one note.
///
/// Every string field holds either a value or [`ABSENT`]; there is no
/// second representation of "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedFields {
    pub itinerary: String,
    pub guest_name: String,
    pub hotel_name: String,
    pub issue: String,
    pub tags: Vec<Tag>,
}

impl ExtractedFields {
    /// Fields with every value at the sentinel.
    pub fn empty() -> Self {
        Self {
            itinerary: absent(),
            guest_name: absent(),
            hotel_name: absent(),
            issue: absent(),
            tags: Vec::new(),
        }
    }

    pub fn has_itinerary(&self) -> bool {
        is_present(&self.itinerary)
    }

    pub fn has_guest_name(&self) -> bool {
        is_present(&self.guest_name)
    }

    pub fn has_hotel_name(&self) -> bool {
        is_present(&self.hotel_name)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Tags as one comma-separated string, or the sentinel when there are none.
    pub fn tags_joined(&self) -> String {
        if self.tags.is_empty() {
            return absent();
        }
        self.tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self::empty()
    }
}
