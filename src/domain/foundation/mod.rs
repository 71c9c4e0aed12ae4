//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, timestamps, and error types shared by the
//! triage engine and the record cache.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::RecordId;
pub use timestamp::Timestamp;
