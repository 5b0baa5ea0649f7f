//! WordGate webhook signing.
//!
//! A delivery carries `X-Webhook-Signature: t=<unix_seconds>,sha256=<hex>`,
//! where the signature is HMAC-SHA256 over `"<unix_seconds>." + body`.
//! The body is signed exactly as transmitted; no canonicalization.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::errors::VerificationError;
use super::secret::WebhookSecret;

/// HTTP header carrying the signed timestamp and digest.
pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";

const TIMESTAMP_PREFIX: &str = "t=";
const SIGNATURE_PREFIX: &str = "sha256=";

type HmacSha256 = Hmac<Sha256>;

/// Computes the raw HMAC-SHA256 digest binding `timestamp` to `body`.
pub(crate) fn digest(timestamp: i64, body: &[u8], secret: &WebhookSecret) -> [u8; 32] {
    let mut mac =
        HmacSha256::new_from_slice(secret.expose()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body);
    mac.finalize().into_bytes().into()
}

/// Signs `body` at `timestamp`, returning the lowercase hex digest.
pub fn sign(timestamp: i64, body: &[u8], secret: &WebhookSecret) -> String {
    hex::encode(digest(timestamp, body, secret))
}

/// Signs `body` and formats the full header value.
pub fn build_header(timestamp: i64, body: &[u8], secret: &WebhookSecret) -> String {
    SignedHeader {
        timestamp,
        signature: sign(timestamp, body, secret),
    }
    .to_string()
}

/// Signs `body` stamped with the current wall-clock time.
pub fn sign_now(body: &[u8], secret: &WebhookSecret) -> String {
    build_header(chrono::Utc::now().timestamp(), body, secret)
}

/// Parsed `X-Webhook-Signature` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeader {
    /// Unix timestamp (seconds) the signature was generated at.
    pub timestamp: i64,
    /// Hex-encoded HMAC-SHA256 digest, as presented on the wire.
    pub signature: String,
}

impl SignedHeader {
    /// Parses a header value.
    ///
    /// Format: `t=<timestamp>,sha256=<signature>`. Exactly two fields, in
    /// that order, no whitespace.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::MalformedHeader` on any deviation.
    pub fn parse(header: &str) -> Result<Self, VerificationError> {
        let parts: Vec<&str> = header.split(',').collect();
        if parts.len() != 2 {
            return Err(VerificationError::MalformedHeader(format!(
                "expected 2 fields, found {}",
                parts.len()
            )));
        }

        let timestamp = parts[0]
            .strip_prefix(TIMESTAMP_PREFIX)
            .ok_or_else(|| VerificationError::MalformedHeader("missing t= field".to_string()))?;
        let signature = parts[1].strip_prefix(SIGNATURE_PREFIX).ok_or_else(|| {
            VerificationError::MalformedHeader("missing sha256= field".to_string())
        })?;

        let timestamp: i64 = timestamp
            .parse()
            .map_err(|_| VerificationError::MalformedHeader("invalid timestamp".to_string()))?;

        if timestamp <= 0 {
            return Err(VerificationError::MalformedHeader(
                "timestamp must be positive".to_string(),
            ));
        }
        if signature.is_empty() {
            return Err(VerificationError::MalformedHeader(
                "empty signature".to_string(),
            ));
        }

        Ok(SignedHeader {
            timestamp,
            signature: signature.to_string(),
        })
    }
}

impl fmt::Display for SignedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            TIMESTAMP_PREFIX, self.timestamp, SIGNATURE_PREFIX, self.signature
        )
    }
}
