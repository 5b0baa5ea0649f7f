//! HandleWebhookHandler - Command handler for inbound WordGate webhooks.

use std::sync::Arc;

use crate::domain::webhook::{WebhookError, WebhookVerifier};

use super::router::{WebhookOutcome, WebhookRouter};

/// Command to handle a webhook delivery.
#[derive(Debug, Clone)]
pub struct HandleWebhookCommand {
    /// Raw request body, exactly as received.
    pub payload: Vec<u8>,
    /// `X-Webhook-Signature` header value.
    pub signature: String,
}

/// Handler for inbound webhook deliveries.
///
/// Verifies the signature, decodes the envelope only once the signature is
/// accepted, then dispatches to the application's registered handlers.
#[derive(Clone)]
pub struct HandleWebhookHandler {
    verifier: Arc<WebhookVerifier>,
    router: Arc<WebhookRouter>,
}

impl HandleWebhookHandler {
    pub fn new(verifier: Arc<WebhookVerifier>, router: Arc<WebhookRouter>) -> Self {
        Self { verifier, router }
    }

    pub async fn handle(&self, cmd: HandleWebhookCommand) -> Result<WebhookOutcome, WebhookError> {
        // 1. Verify signature and decode envelope
        let envelope = self
            .verifier
            .verify_and_decode(&cmd.signature, &cmd.payload)?;

        tracing::info!(
            event_type = %envelope.event_type,
            app_id = envelope.app_id,
            timestamp = envelope.timestamp,
            "Accepted webhook event"
        );

        // 2. Dispatch to application handler
        let outcome = self.router.dispatch(&envelope).await.inspect_err(|e| {
            tracing::error!(
                event_type = %envelope.event_type,
                error = %e,
                "Webhook handler failed"
            );
        })?;

        Ok(outcome)
    }
}
