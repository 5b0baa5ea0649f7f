//! Webhook domain module.
//!
//! Authenticates and decodes event notifications pushed by the WordGate
//! platform.
//!
//! # Module Structure
//!
//! - `secret` - Shared signing secret
//! - `signature` - HMAC-SHA256 signer and `X-Webhook-Signature` header
//! - `verifier` - Freshness window and constant-time verification
//! - `envelope` - Two-phase event envelope decoding
//! - `payloads` - Typed payload records per event type
//! - `event` - Tag-dispatched typed event
//! - `errors` - Verification and decode error taxonomy

mod envelope;
mod errors;
mod event;
mod payloads;
mod secret;
mod signature;
mod verifier;

pub use envelope::{EventEnvelope, EventType};
pub use errors::{DecodeError, VerificationError, WebhookError};
pub use event::WebhookEvent;
pub use payloads::{
    OrderCancelledData, OrderPaidData, SubscriptionCreatedData, SubscriptionUpdatedData,
};
pub use secret::WebhookSecret;
pub use signature::{build_header, sign, sign_now, SignedHeader, SIGNATURE_HEADER};
pub use verifier::{
    verify, WebhookVerifier, DEFAULT_MAX_AGE_SECS, DEFAULT_MAX_FUTURE_SKEW_SECS,
};

#[cfg(test)]
pub use envelope::EventEnvelopeBuilder;
