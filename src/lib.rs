//! WordGate - webhook authentication and event decoding
//!
//! Signs and verifies `X-Webhook-Signature` headers on event notifications
//! pushed by the WordGate commerce platform, and decodes the event envelope
//! into typed payloads.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
