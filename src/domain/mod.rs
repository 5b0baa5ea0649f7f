//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `webhook` - Webhook signing, verification and event envelope decoding

pub mod webhook;
