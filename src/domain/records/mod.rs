//! Saved ticket records: the best-effort local cache of finished tickets.

mod saved_record;

pub use saved_record::{clamp_text, SavedRecord, DEFAULT_RAW_TEXT_LIMIT};
