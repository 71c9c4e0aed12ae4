//! HttpDraftRelay - calls a remote drafting endpoint over HTTP.
//!
//! Wire contract:
//!
//! ```text
//! POST {base_url}/api/draft
//! { "notes": "...", "extractedFields": { ... } }
//!
//! 200 { "draft": "..." }
//! 4xx/5xx { "error": "..." }
//! ```
//!
//! The body is read as text and parsed separately so a non-JSON reply is
//! reported as malformed rather than as a transport failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::triage::ExtractedFields;
use crate::ports::{DraftRelay, RelayError};

pub const DRAFT_PATH: &str = "/api/draft";

pub struct HttpDraftRelay {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpDraftRelay {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), DRAFT_PATH),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Status first; an error reply keeps its code even when the body is not JSON.
    fn interpret(status: u16, body: &str) -> Result<String, RelayError> {
        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<RelayReply>(body)
                .ok()
                .and_then(|reply| reply.error)
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(RelayError::status(status, message));
        }

        let reply: RelayReply = serde_json::from_str(body)
            .map_err(|e| RelayError::malformed(format!("expected JSON body: {}", e)))?;

        match reply.draft.as_deref().map(str::trim) {
            Some(draft) if !draft.is_empty() => Ok(draft.to_string()),
            _ => Err(RelayError::EmptyDraft),
        }
    }
}

#[async_trait]
impl DraftRelay for HttpDraftRelay {
    async fn generate_draft(
        &self,
        notes: &str,
        fields: &ExtractedFields,
    ) -> Result<String, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RelayPayload {
                notes,
                extracted_fields: fields,
            })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        debug!(status, bytes = body.len(), "Relay responded");
        Self::interpret(status, &body)
    }
}

impl HttpDraftRelay {
    fn transport_error(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            RelayError::transport(err.to_string())
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayPayload<'a> {
    notes: &'a str,
    extracted_fields: &'a ExtractedFields,
}

#[derive(Deserialize)]
struct RelayReply {
    draft: Option<String>,
    error: Option<String>,
}
