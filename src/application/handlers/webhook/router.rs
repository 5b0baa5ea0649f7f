//! WebhookRouter - Routes accepted events to registered handlers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::webhook::{EventEnvelope, EventType, WebhookError};
use crate::ports::WebhookEventHandler;

/// Result of dispatching an accepted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// A registered handler processed the event.
    Processed { event_type: EventType },
    /// No handler is registered for the event type; acknowledged anyway.
    Ignored { event_type: EventType },
}

/// Dispatches events to handlers keyed by event type.
///
/// One handler per type; registering a second handler for a type replaces
/// the first.
#[derive(Default, Clone)]
pub struct WebhookRouter {
    handlers: HashMap<EventType, Arc<dyn WebhookEventHandler>>,
}

impl WebhookRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every type it reports in `handles()`.
    pub fn register(mut self, handler: Arc<dyn WebhookEventHandler>) -> Self {
        for event_type in handler.handles() {
            if self
                .handlers
                .insert(event_type.clone(), handler.clone())
                .is_some()
            {
                tracing::warn!(%event_type, "Replacing previously registered webhook handler");
            }
        }
        self
    }

    /// Find a handler for the given event type.
    pub fn handler_for(&self, event_type: &EventType) -> Option<&Arc<dyn WebhookEventHandler>> {
        self.handlers.get(event_type)
    }

    /// Event types with a registered handler.
    pub fn registered_types(&self) -> Vec<&EventType> {
        self.handlers.keys().collect()
    }

    /// Dispatch an event to its handler.
    pub async fn dispatch(&self, event: &EventEnvelope) -> Result<WebhookOutcome, WebhookError> {
        match self.handler_for(&event.event_type) {
            Some(handler) => {
                handler.handle(event).await?;
                Ok(WebhookOutcome::Processed {
                    event_type: event.event_type.clone(),
                })
            }
            None => {
                tracing::debug!(
                    event_type = %event.event_type,
                    "No webhook handler registered, acknowledging"
                );
                Ok(WebhookOutcome::Ignored {
                    event_type: event.event_type.clone(),
                })
            }
        }
    }
}
