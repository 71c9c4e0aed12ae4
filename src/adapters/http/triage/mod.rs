//! HTTP adapter for triage endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::TriageAppState;
pub use routes::triage_router;
