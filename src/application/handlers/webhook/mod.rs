//! Webhook command handlers.

mod handle_webhook;
mod router;

pub use handle_webhook::{HandleWebhookCommand, HandleWebhookHandler};
pub use router::{WebhookOutcome, WebhookRouter};
