use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{clear_records, delete_record, list_records, save_record, RecordsAppState};

/// Create the saved-record router.
///
/// # Routes
/// - `GET /api/records` - List records, newest first
/// - `POST /api/records` - Save a ticket
/// - `DELETE /api/records` - Clear all records
/// - `DELETE /api/records/:id` - Delete one record
pub fn records_router() -> Router<RecordsAppState> {
    Router::new()
        .route(
            "/api/records",
            get(list_records).post(save_record).delete(clear_records),
        )
        .route("/api/records/:id", delete(delete_record))
}
