//! Error responses shared by the triage and records endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::TriageError;
use crate::ports::RelayError;

/// Error body. `error` is the human-readable message clients display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    /// Stable code for programmatic handling.
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            error_code: error_code.into(),
        }
    }
}

/// API error wrapper that converts application errors to HTTP responses.
#[derive(Debug)]
pub struct TriageApiError(pub TriageError);

impl From<TriageError> for TriageApiError {
    fn from(err: TriageError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for TriageApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TriageError::invalid_request(rejection.body_text()))
    }
}

impl TriageApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            TriageError::EmptyNotes => (StatusCode::BAD_REQUEST, "MISSING_NOTES"),
            TriageError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            TriageError::RecordNotFound(_) => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
            TriageError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
            TriageError::Relay(RelayError::NotConfigured) => {
                (StatusCode::SERVICE_UNAVAILABLE, "DRAFTING_NOT_CONFIGURED")
            }
            TriageError::Relay(RelayError::Timeout { .. }) => {
                (StatusCode::GATEWAY_TIMEOUT, "RELAY_TIMEOUT")
            }
            TriageError::Relay(_) => (StatusCode::BAD_GATEWAY, "RELAY_FAILED"),
        }
    }
}

impl IntoResponse for TriageApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = self.status_and_code();
        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RecordId;
    use crate::ports::StoreError;

    fn status_of(err: TriageError) -> StatusCode {
        TriageApiError(err).into_response().status()
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_of(TriageError::EmptyNotes), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(TriageError::invalid_request("notes must be a string")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(TriageError::RecordNotFound(RecordId::new())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn relay_errors_map_to_gateway_statuses() {
        assert_eq!(
            status_of(RelayError::NotConfigured.into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(RelayError::Timeout { timeout_secs: 30 }.into()),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(status_of(RelayError::EmptyDraft.into()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn store_errors_are_internal() {
        assert_eq!(
            status_of(StoreError::Io("disk full".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_carries_message_and_code() {
        let json = serde_json::to_value(ErrorResponse::new("MISSING_NOTES", "Missing notes")).unwrap();
        assert_eq!(json["error"], "Missing notes");
        assert_eq!(json["errorCode"], "MISSING_NOTES");
    }
}
