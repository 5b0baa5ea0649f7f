//! HTTP adapter for inbound WordGate webhooks.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, WebhookAckResponse};
pub use handlers::{handle_wordgate_webhook, WebhookApiError, WebhookAppState};
pub use routes::{webhook_router, webhook_routes};
