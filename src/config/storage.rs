//! Saved-record storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::records::DEFAULT_RAW_TEXT_LIMIT;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding saved records
    #[serde(default = "default_records_path")]
    pub records_path: PathBuf,

    /// Characters of raw notes kept per record
    #[serde(default = "default_raw_text_limit")]
    pub raw_text_limit: usize,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.records_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyRecordsPath);
        }
        if self.raw_text_limit == 0 {
            return Err(ValidationError::InvalidRawTextLimit);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            records_path: default_records_path(),
            raw_text_limit: default_raw_text_limit(),
        }
    }
}

fn default_records_path() -> PathBuf {
    PathBuf::from("ticket-copilot-records.json")
}

fn default_raw_text_limit() -> usize {
    DEFAULT_RAW_TEXT_LIMIT
}
