//! Webhook error types.
//!
//! Verification failures, envelope decode failures, and the umbrella
//! `WebhookError` used by receivers, with HTTP status code mapping and
//! retryability semantics.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced while authenticating an inbound webhook.
///
/// All variants are terminal for the given input. A receiver answers with
/// the mapped status and drops the event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Signature header is not `t=<timestamp>,sha256=<signature>`.
    #[error("Malformed signature header: {0}")]
    MalformedHeader(String),

    /// Signature timestamp falls outside the freshness window.
    #[error("Signature timestamp outside freshness window")]
    Expired,

    /// Recomputed HMAC does not match the presented signature.
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Verifier was set up with unusable parameters (e.g. an empty secret).
    #[error("Invalid webhook configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Errors produced while decoding an event envelope or its payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Body is not JSON or lacks a required envelope field.
    #[error("Malformed event envelope: {0}")]
    EnvelopeMalformed(String),

    /// `data` cannot be decoded into the requested payload shape.
    #[error("Payload does not match requested type: {0}")]
    PayloadTypeMismatch(String),
}

/// Errors that occur during end-to-end webhook handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An application handler failed while processing an accepted event.
    #[error("Handler error: {0}")]
    Handler(String),
}

impl WebhookError {
    /// Creates a handler error from any displayable failure.
    pub fn handler(message: impl Into<String>) -> Self {
        WebhookError::Handler(message.into())
    }

    /// Returns true if the sender should redeliver this webhook.
    ///
    /// Only handler failures are transient. Authentication and decode
    /// failures will fail identically on every delivery.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WebhookError::Handler(_))
    }

    /// Maps the error to the HTTP status a receiver should answer with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::Verification(VerificationError::MalformedHeader(_)) => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::Verification(VerificationError::SignatureMismatch) => {
                StatusCode::UNAUTHORIZED
            }
            WebhookError::Verification(VerificationError::Expired) => StatusCode::REQUEST_TIMEOUT,

            // Receiver misconfiguration is our fault, not the sender's
            WebhookError::Verification(VerificationError::InvalidConfiguration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            WebhookError::Decode(_) => StatusCode::BAD_REQUEST,

            WebhookError::Handler(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            WebhookError::Verification(VerificationError::MalformedHeader(_)) => {
                "MALFORMED_HEADER"
            }
            WebhookError::Verification(VerificationError::Expired) => "SIGNATURE_EXPIRED",
            WebhookError::Verification(VerificationError::SignatureMismatch) => {
                "SIGNATURE_MISMATCH"
            }
            WebhookError::Verification(VerificationError::InvalidConfiguration(_)) => {
                "INVALID_CONFIGURATION"
            }
            WebhookError::Decode(DecodeError::EnvelopeMalformed(_)) => "ENVELOPE_MALFORMED",
            WebhookError::Decode(DecodeError::PayloadTypeMismatch(_)) => "PAYLOAD_TYPE_MISMATCH",
            WebhookError::Handler(_) => "HANDLER_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ══════════════════════════════════════════════════════════════
    // Error Display Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn malformed_header_displays_reason() {
        let err = VerificationError::MalformedHeader("expected 2 fields".to_string());
        assert_eq!(
            format!("{}", err),
            "Malformed signature header: expected 2 fields"
        );
    }

    #[test]
    fn signature_mismatch_displays_correctly() {
        assert_eq!(
            format!("{}", VerificationError::SignatureMismatch),
            "Signature mismatch"
        );
    }

    #[test]
    fn webhook_error_is_transparent_over_verification() {
        let err = WebhookError::from(VerificationError::Expired);
        assert_eq!(
            format!("{}", err),
            "Signature timestamp outside freshness window"
        );
    }

    #[test]
    fn payload_type_mismatch_displays_reason() {
        let err = DecodeError::PayloadTypeMismatch("missing field `amount`".to_string());
        assert_eq!(
            format!("{}", err),
            "Payload does not match requested type: missing field `amount`"
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Status Code Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn malformed_header_returns_bad_request() {
        let err = WebhookError::from(VerificationError::MalformedHeader("x".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn signature_mismatch_returns_unauthorized() {
        let err = WebhookError::from(VerificationError::SignatureMismatch);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn expired_returns_request_timeout() {
        let err = WebhookError::from(VerificationError::Expired);
        assert_eq!(err.status_code(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn envelope_malformed_returns_bad_request() {
        let err = WebhookError::from(DecodeError::EnvelopeMalformed("eof".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_configuration_returns_internal_error() {
        let err = WebhookError::from(VerificationError::InvalidConfiguration("empty secret"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn handler_error_returns_internal_error() {
        let err = WebhookError::handler("database unavailable");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // ══════════════════════════════════════════════════════════════
    // Retryability Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn handler_error_is_retryable() {
        assert!(WebhookError::handler("timeout").is_retryable());
    }

    #[test]
    fn verification_errors_are_not_retryable() {
        for err in [
            VerificationError::MalformedHeader("x".to_string()),
            VerificationError::Expired,
            VerificationError::SignatureMismatch,
        ] {
            assert!(!WebhookError::from(err).is_retryable());
        }
    }

    #[test]
    fn decode_errors_are_not_retryable() {
        let err = WebhookError::from(DecodeError::EnvelopeMalformed("bad".to_string()));
        assert!(!err.is_retryable());
    }

    #[test]
    fn codes_are_distinct_per_variant() {
        assert_eq!(
            WebhookError::from(VerificationError::SignatureMismatch).code(),
            "SIGNATURE_MISMATCH"
        );
        assert_eq!(
            WebhookError::from(VerificationError::Expired).code(),
            "SIGNATURE_EXPIRED"
        );
        assert_eq!(WebhookError::handler("x").code(), "HANDLER_FAILED");
    }
}
