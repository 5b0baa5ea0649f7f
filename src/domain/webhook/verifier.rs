//! WordGate webhook signature verification.
//!
//! Authenticates inbound deliveries against the shared secret and rejects
//! stale or forward-dated signatures to bound replay exposure.

use subtle::ConstantTimeEq;

use super::envelope::EventEnvelope;
use super::errors::{VerificationError, WebhookError};
use super::secret::WebhookSecret;
use super::signature::{sign, SignedHeader};

/// Default freshness window (5 minutes).
pub const DEFAULT_MAX_AGE_SECS: i64 = 300;

/// Default tolerance for timestamps ahead of the local clock (1 minute).
pub const DEFAULT_MAX_FUTURE_SKEW_SECS: i64 = 60;

/// Verifier for WordGate webhook signatures.
#[derive(Debug)]
pub struct WebhookVerifier {
    secret: WebhookSecret,
    max_age_secs: i64,
    max_future_skew_secs: i64,
}

impl WebhookVerifier {
    /// Creates a verifier with the default freshness window and clock skew.
    pub fn new(secret: WebhookSecret) -> Self {
        Self {
            secret,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            max_future_skew_secs: DEFAULT_MAX_FUTURE_SKEW_SECS,
        }
    }

    /// Sets the maximum accepted signature age in seconds.
    ///
    /// Negative values are treated as zero.
    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age_secs = secs.max(0);
        self
    }

    /// Sets how far ahead of the local clock a timestamp may be.
    ///
    /// Negative values are treated as zero.
    pub fn with_max_future_skew(mut self, secs: i64) -> Self {
        self.max_future_skew_secs = secs.max(0);
        self
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    pub fn max_future_skew_secs(&self) -> i64 {
        self.max_future_skew_secs
    }

    /// Verifies a delivery against the current wall-clock time.
    ///
    /// # Errors
    ///
    /// - `MalformedHeader` - Header is not `t=<ts>,sha256=<sig>`
    /// - `Expired` - Timestamp is outside the freshness window
    /// - `SignatureMismatch` - Digest does not match
    pub fn verify(&self, header: &str, body: &[u8]) -> Result<(), VerificationError> {
        self.verify_at(header, body, chrono::Utc::now().timestamp())
    }

    /// Verifies a delivery against an explicit `now` (unix seconds).
    pub fn verify_at(&self, header: &str, body: &[u8], now: i64) -> Result<(), VerificationError> {
        check(
            header,
            body,
            &self.secret,
            self.max_age_secs,
            self.max_future_skew_secs,
            now,
        )
    }

    /// Verifies a delivery and, once accepted, decodes its envelope.
    pub fn verify_and_decode(
        &self,
        header: &str,
        body: &[u8],
    ) -> Result<EventEnvelope, WebhookError> {
        self.verify(header, body)?;
        Ok(EventEnvelope::decode(body)?)
    }
}

/// Verifies a delivery with an explicit freshness window.
///
/// Forward-dated timestamps are tolerated up to
/// [`DEFAULT_MAX_FUTURE_SKEW_SECS`].
pub fn verify(
    header: &str,
    body: &[u8],
    secret: &WebhookSecret,
    max_age_secs: i64,
) -> Result<(), VerificationError> {
    check(
        header,
        body,
        secret,
        max_age_secs,
        DEFAULT_MAX_FUTURE_SKEW_SECS,
        chrono::Utc::now().timestamp(),
    )
}

/// # Verification Steps
///
/// 1. Parse the signature header
/// 2. Validate timestamp is within the freshness window
/// 3. Recompute the expected signature over the exact body bytes
/// 4. Compare signatures in constant time
fn check(
    header: &str,
    body: &[u8],
    secret: &WebhookSecret,
    max_age_secs: i64,
    max_future_skew_secs: i64,
    now: i64,
) -> Result<(), VerificationError> {
    // 1. Parse signature header
    let header = SignedHeader::parse(header).inspect_err(|e| {
        tracing::warn!(reason = %e, "Rejected webhook: malformed signature header");
    })?;

    // 2. Validate timestamp (negative windows collapse to zero)
    let max_age_secs = max_age_secs.max(0);
    let max_future_skew_secs = max_future_skew_secs.max(0);
    let age = now.saturating_sub(header.timestamp);
    if age > max_age_secs {
        tracing::warn!(timestamp = header.timestamp, age, "Rejected webhook: signature expired");
        return Err(VerificationError::Expired);
    }
    if age < max_future_skew_secs.saturating_neg() {
        tracing::warn!(
            timestamp = header.timestamp,
            age,
            "Rejected webhook: timestamp in the future"
        );
        return Err(VerificationError::Expired);
    }

    // 3. Compute expected signature
    let expected = sign(header.timestamp, body, secret);

    // 4. Compare signatures (constant-time)
    if !constant_time_compare(expected.as_bytes(), header.signature.as_bytes()) {
        tracing::warn!(
            timestamp = header.timestamp,
            "Rejected webhook: signature mismatch"
        );
        return Err(VerificationError::SignatureMismatch);
    }

    tracing::debug!(
        timestamp = header.timestamp,
        body_len = body.len(),
        "Webhook signature verified"
    );
    Ok(())
}

/// Performs constant-time comparison of two byte slices.
///
/// Length is not secret (always 64 for a well-formed signature), so a
/// length mismatch returns early.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
