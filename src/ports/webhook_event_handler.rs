//! WebhookEventHandler port - Application hook for accepted webhook events.
//!
//! The consuming application implements this trait once per concern
//! (fulfilment, membership sync, ...) and registers it with a
//! `WebhookRouter`. Handlers only ever see events whose signature has
//! already been verified.

use async_trait::async_trait;

use crate::domain::webhook::{EventEnvelope, EventType, WebhookError};

/// Handler for one or more WordGate webhook event types.
///
/// Implementations should be stateless with respect to individual events
/// and idempotent: the platform may redeliver an event after a 5xx.
///
/// # Example
///
/// ```ignore
/// struct FulfilOrders;
///
/// #[async_trait]
/// impl WebhookEventHandler for FulfilOrders {
///     fn handles(&self) -> Vec<EventType> {
///         vec![EventType::from(EventType::ORDER_PAID)]
///     }
///
///     async fn handle(&self, event: &EventEnvelope) -> Result<(), WebhookError> {
///         let paid: OrderPaidData = event.parse_data()?;
///         ship(&paid.wordgate_order_no).await.map_err(WebhookError::handler)
///     }
/// }
/// ```
#[async_trait]
pub trait WebhookEventHandler: Send + Sync {
    /// Returns the event type(s) this handler processes.
    fn handles(&self) -> Vec<EventType>;

    /// Handles an accepted event.
    ///
    /// Returns `Err(WebhookError::Decode(_))` if the payload does not fit the
    /// expected shape, or `Err(WebhookError::Handler(_))` for transient
    /// failures the platform should retry.
    async fn handle(&self, event: &EventEnvelope) -> Result<(), WebhookError>;
}
