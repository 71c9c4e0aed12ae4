//! Saved-record command and query handlers.

mod delete_record;
mod list_records;
mod save_record;

pub use delete_record::{ClearRecordsHandler, DeleteRecordCommand, DeleteRecordHandler};
pub use list_records::ListRecordsHandler;
pub use save_record::{SaveRecordCommand, SaveRecordHandler};
