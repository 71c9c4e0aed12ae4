//! HTTP adapter for the saved-record cache.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::RecordsAppState;
pub use routes::records_router;
