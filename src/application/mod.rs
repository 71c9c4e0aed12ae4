//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Triage handlers are pure request/response; record handlers go through
//! the `RecordStore` port.

mod error;
pub mod handlers;

pub use error::TriageError;
pub use handlers::*;
