//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Webhook Ports
//!
//! - `WebhookEventHandler` - Application logic run for accepted events

mod webhook_event_handler;

pub use webhook_event_handler::WebhookEventHandler;
