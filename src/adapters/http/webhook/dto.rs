//! Data Transfer Objects for webhook endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::webhook::WebhookOutcome;

/// Acknowledgement body returned with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAckResponse {
    pub received: bool,
    pub event_type: String,
    /// `processed` or `ignored`.
    pub status: String,
}

impl From<WebhookOutcome> for WebhookAckResponse {
    fn from(outcome: WebhookOutcome) -> Self {
        let (event_type, status) = match outcome {
            WebhookOutcome::Processed { event_type } => (event_type, "processed"),
            WebhookOutcome::Ignored { event_type } => (event_type, "ignored"),
        };
        Self {
            received: true,
            event_type: event_type.to_string(),
            status: status.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
