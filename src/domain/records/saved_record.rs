//! SavedRecord - a finished ticket as kept in the local cache.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RecordId, Timestamp};
use crate::domain::triage::AnalysisResult;

/// Raw note text kept per record, in characters.
pub const DEFAULT_RAW_TEXT_LIMIT: usize = 2000;

/// Truncates to at most `max_chars` characters.
pub fn clamp_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// A ticket saved by the agent.
///
/// Identity and timestamp are assigned by whoever saves the record; the
/// triage engine never creates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub id: RecordId,
    pub saved_at: Timestamp,
    pub itinerary: String,
    pub guest_name: String,
    pub hotel_name: String,
    pub issue: String,
    /// Comma-separated tags, or the absence sentinel.
    pub tags: String,
    pub macro_title: String,
    pub draft_reply: String,
    pub raw_text: String,
}

impl SavedRecord {
    /// Export column names, in row order.
    pub const COLUMNS: [&'static str; 10] = [
        "id",
        "savedAt",
        "itinerary",
        "guestName",
        "hotelName",
        "issue",
        "tags",
        "macroTitle",
        "draftReply",
        "rawText",
    ];

    /// Captures an analysis together with the reply the agent settled on.
    pub fn capture(
        id: RecordId,
        saved_at: Timestamp,
        analysis: &AnalysisResult,
        draft_reply: &str,
        raw_text: &str,
        raw_text_limit: usize,
    ) -> Self {
        let fields = &analysis.fields;
        Self {
            id,
            saved_at,
            itinerary: fields.itinerary.clone(),
            guest_name: fields.guest_name.clone(),
            hotel_name: fields.hotel_name.clone(),
            issue: fields.issue.clone(),
            tags: fields.tags_joined(),
            macro_title: analysis.draft.macro_title.clone(),
            draft_reply: draft_reply.to_string(),
            raw_text: clamp_text(raw_text, raw_text_limit),
        }
    }

    /// Values in [`Self::COLUMNS`] order.
    pub fn row(&self) -> [String; 10] {
        [
            self.id.to_string(),
            self.saved_at.to_rfc3339(),
            self.itinerary.clone(),
            self.guest_name.clone(),
            self.hotel_name.clone(),
            self.issue.clone(),
            self.tags.clone(),
            self.macro_title.clone(),
            self.draft_reply.clone(),
            self.raw_text.clone(),
        ]
    }

    pub fn raw_chars(&self) -> usize {
        self.raw_text.chars().count()
    }
}
