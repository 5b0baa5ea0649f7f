//! WordGate webhook event envelope.
//!
//! Decoding is two-phase. The envelope decodes eagerly with `data` held as
//! an untyped JSON value; the payload decodes lazily once the caller has
//! branched on `event_type` and picked a destination shape.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::DecodeError;

/// Dot-namespaced event type tag (e.g. `order.paid`).
///
/// Open set: types unknown to this crate still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    pub const ORDER_PAID: &'static str = "order.paid";
    pub const ORDER_CANCELLED: &'static str = "order.cancelled";
    pub const SUBSCRIPTION_CREATED: &'static str = "subscription.created";
    pub const SUBSCRIPTION_UPDATED: &'static str = "subscription.updated";
    pub const SUBSCRIPTION_CANCELLED: &'static str = "subscription.cancelled";
    pub const SUBSCRIPTION_RENEWED: &'static str = "subscription.renewed";

    /// Event types the platform currently emits.
    pub const KNOWN: [&'static str; 6] = [
        Self::ORDER_PAID,
        Self::ORDER_CANCELLED,
        Self::SUBSCRIPTION_CREATED,
        Self::SUBSCRIPTION_UPDATED,
        Self::SUBSCRIPTION_CANCELLED,
        Self::SUBSCRIPTION_RENEWED,
    ];

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this crate ships a constant for the type.
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    /// Leading segment of the tag (`order` for `order.paid`).
    pub fn namespace(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<&str> for EventType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Outer structure of every webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Type tag selecting the shape of `data`.
    pub event_type: EventType,

    /// Application the event belongs to.
    pub app_id: u64,

    /// Event payload (polymorphic based on `event_type`).
    pub data: serde_json::Value,

    /// Time the event was emitted (Unix timestamp).
    pub timestamp: i64,
}

impl EventEnvelope {
    /// Decodes the outer envelope from a raw delivery body.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::EnvelopeMalformed` for invalid JSON or a
    /// missing envelope field.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(|e| DecodeError::EnvelopeMalformed(e.to_string()))
    }

    /// Decodes `data` into the caller's chosen payload shape.
    ///
    /// A failure here leaves the envelope intact; the caller may retry with
    /// another shape or fall back to the raw value.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::PayloadTypeMismatch` if `data` does not fit `T`.
    pub fn parse_data<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        T::deserialize(&self.data).map_err(|e| {
            DecodeError::PayloadTypeMismatch(format!("{}: {}", self.event_type, e))
        })
    }
}

/// Builder for creating test EventEnvelope instances.
#[cfg(test)]
pub struct EventEnvelopeBuilder {
    event_type: String,
    app_id: u64,
    data: serde_json::Value,
    timestamp: i64,
}

#[cfg(test)]
impl Default for EventEnvelopeBuilder {
    fn default() -> Self {
        Self {
            event_type: EventType::ORDER_PAID.to_string(),
            app_id: 1,
            data: serde_json::json!({}),
            timestamp: 1734315480,
        }
    }
}

#[cfg(test)]
impl EventEnvelopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn app_id(mut self, app_id: u64) -> Self {
        self.app_id = app_id;
        self
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> EventEnvelope {
        EventEnvelope {
            event_type: EventType::new(self.event_type),
            app_id: self.app_id,
            data: self.data,
            timestamp: self.timestamp,
        }
    }
}
