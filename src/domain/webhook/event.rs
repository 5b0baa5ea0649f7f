//! Typed view over a decoded envelope.

use super::envelope::{EventEnvelope, EventType};
use super::errors::DecodeError;
use super::payloads::{
    OrderCancelledData, OrderPaidData, SubscriptionCreatedData, SubscriptionUpdatedData,
};

/// A webhook event with its payload decoded according to the type tag.
///
/// Types without a dedicated payload record (including types introduced
/// server-side after this release) land in `Other` with the envelope intact.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    OrderPaid(OrderPaidData),
    OrderCancelled(OrderCancelledData),
    SubscriptionCreated(SubscriptionCreatedData),
    SubscriptionUpdated(SubscriptionUpdatedData),
    Other(EventEnvelope),
}

impl WebhookEvent {
    /// Performs the tag-gated second decode phase.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::PayloadTypeMismatch` if the tag names a typed
    /// payload but `data` does not fit it.
    pub fn from_envelope(envelope: EventEnvelope) -> Result<Self, DecodeError> {
        let event = match envelope.event_type.as_str() {
            EventType::ORDER_PAID => WebhookEvent::OrderPaid(envelope.parse_data()?),
            EventType::ORDER_CANCELLED => WebhookEvent::OrderCancelled(envelope.parse_data()?),
            EventType::SUBSCRIPTION_CREATED => {
                WebhookEvent::SubscriptionCreated(envelope.parse_data()?)
            }
            EventType::SUBSCRIPTION_UPDATED => {
                WebhookEvent::SubscriptionUpdated(envelope.parse_data()?)
            }
            _ => WebhookEvent::Other(envelope),
        };
        Ok(event)
    }

    /// Decodes a raw body straight into a typed event.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        Self::from_envelope(EventEnvelope::decode(body)?)
    }

    pub fn event_type(&self) -> EventType {
        match self {
            WebhookEvent::OrderPaid(_) => EventType::from(EventType::ORDER_PAID),
            WebhookEvent::OrderCancelled(_) => EventType::from(EventType::ORDER_CANCELLED),
            WebhookEvent::SubscriptionCreated(_) => {
                EventType::from(EventType::SUBSCRIPTION_CREATED)
            }
            WebhookEvent::SubscriptionUpdated(_) => {
                EventType::from(EventType::SUBSCRIPTION_UPDATED)
            }
            WebhookEvent::Other(envelope) => envelope.event_type.clone(),
        }
    }
}
