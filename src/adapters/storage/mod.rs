//! Record store adapters.
//!
//! - `InMemoryRecordStore` - process-local, lost on restart
//! - `JsonFileRecordStore` - single JSON file on disk

mod in_memory;
mod json_file;

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileRecordStore;
