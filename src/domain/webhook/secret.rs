//! Webhook signing secret.

use std::fmt;

use secrecy::{ExposeSecret, Secret};

use super::errors::VerificationError;

/// Shared secret used to sign and verify webhook deliveries.
///
/// Opaque bytes provisioned out of band. Never printed, never serialized.
/// Construction rejects an empty secret, so every signature produced or
/// checked with a `WebhookSecret` is keyed.
pub struct WebhookSecret {
    bytes: Secret<Vec<u8>>,
}

impl WebhookSecret {
    /// Creates a secret from its textual form (e.g. `whsec_...`).
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::InvalidConfiguration` if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, VerificationError> {
        Self::from_bytes(secret.into().into_bytes())
    }

    /// Creates a secret from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::InvalidConfiguration` if `bytes` is empty.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, VerificationError> {
        if bytes.is_empty() {
            return Err(VerificationError::InvalidConfiguration(
                "webhook secret must not be empty",
            ));
        }
        Ok(Self {
            bytes: Secret::new(bytes),
        })
    }

    pub(crate) fn expose(&self) -> &[u8] {
        self.bytes.expose_secret()
    }
}

impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookSecret([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_rejected() {
        let result = WebhookSecret::new("");
        assert!(matches!(
            result,
            Err(VerificationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_byte_secret_is_rejected() {
        assert!(WebhookSecret::from_bytes(Vec::new()).is_err());
    }

    #[test]
    fn secret_exposes_original_bytes() {
        let secret = WebhookSecret::new("whsec_test").unwrap();
        assert_eq!(secret.expose(), b"whsec_test");
    }

    #[test]
    fn debug_output_is_redacted() {
        let secret = WebhookSecret::new("whsec_very_private").unwrap();
        let printed = format!("{:?}", secret);
        assert!(!printed.contains("very_private"));
        assert!(printed.contains("REDACTED"));
    }
}
