//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `triage` - Ticket analysis engine and draft workspace
//! - `records` - Saved ticket records

pub mod foundation;
pub mod records;
pub mod triage;
