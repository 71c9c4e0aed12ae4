//! Draft relay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Remote relay settings.
///
/// When `url` is set, drafts are fetched from that service instead of
/// calling the AI provider in-process.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Base URL of a remote relay exposing `POST /api/draft`
    pub url: Option<String>,

    /// Seconds to wait for a draft before falling back to the local macro
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = self.remote_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidUrl("relay"));
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
