//! HTTP handlers for webhook endpoints.
//!
//! These handlers connect Axum routes to the webhook command handler.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::webhook::{HandleWebhookCommand, HandleWebhookHandler};
use crate::domain::webhook::{VerificationError, WebhookError, SIGNATURE_HEADER};

use super::dto::{ErrorResponse, WebhookAckResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for webhook routes.
#[derive(Clone)]
pub struct WebhookAppState {
    pub webhook_handler: HandleWebhookHandler,
}

impl WebhookAppState {
    pub fn new(webhook_handler: HandleWebhookHandler) -> Self {
        Self { webhook_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /webhooks/wordgate - Handle WordGate webhook events
pub async fn handle_wordgate_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    // Extract signature header
    let signature = headers
        .get(SIGNATURE_HEADER)
        .ok_or_else(|| {
            VerificationError::MalformedHeader(format!("missing {} header", SIGNATURE_HEADER))
        })?
        .to_str()
        .map_err(|_| VerificationError::MalformedHeader("header is not ASCII".to_string()))?;

    let cmd = HandleWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    let outcome = state.webhook_handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(WebhookAckResponse::from(outcome))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl From<VerificationError> for WebhookApiError {
    fn from(err: VerificationError) -> Self {
        Self(WebhookError::from(err))
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let body = ErrorResponse::new(self.0.code(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}
