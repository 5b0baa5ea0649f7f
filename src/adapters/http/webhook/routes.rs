//! Axum router configuration for webhook endpoints.

use axum::{routing::post, Router};

use super::handlers::{handle_wordgate_webhook, WebhookAppState};

/// Create the webhook router.
///
/// Webhooks don't carry user authentication; they're verified via
/// signature.
///
/// # Routes
/// - `POST /wordgate` - Handle WordGate webhooks
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route("/wordgate", post(handle_wordgate_webhook))
}

/// Create the webhook module router, mounted under `/webhooks`.
pub fn webhook_router() -> Router<WebhookAppState> {
    Router::new().nest("/webhooks", webhook_routes())
}
