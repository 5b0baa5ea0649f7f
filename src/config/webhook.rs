//! Webhook verification configuration

use std::fmt;

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::webhook::{
    WebhookSecret, WebhookVerifier, DEFAULT_MAX_AGE_SECS, DEFAULT_MAX_FUTURE_SKEW_SECS,
};

/// Webhook configuration (shared secret and freshness policy)
#[derive(Clone, Deserialize)]
pub struct WebhookConfig {
    /// Webhook signing secret issued by WordGate
    #[serde(default)]
    pub secret: String,

    /// Maximum accepted signature age in seconds
    #[serde(default = "default_max_age")]
    pub max_age_secs: i64,

    /// Tolerance for signatures dated ahead of the local clock
    #[serde(default = "default_max_future_skew")]
    pub max_future_skew_secs: i64,
}

impl WebhookConfig {
    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret.is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK__SECRET"));
        }
        if self.max_age_secs <= 0 {
            return Err(ValidationError::InvalidMaxAge);
        }
        if self.max_future_skew_secs < 0 {
            return Err(ValidationError::InvalidClockSkew);
        }
        Ok(())
    }

    /// Build a verifier from this configuration.
    pub fn verifier(&self) -> Result<WebhookVerifier, ValidationError> {
        self.validate()?;
        let secret = WebhookSecret::new(self.secret.clone())
            .map_err(|_| ValidationError::MissingRequired("WEBHOOK__SECRET"))?;
        Ok(WebhookVerifier::new(secret)
            .with_max_age(self.max_age_secs)
            .with_max_future_skew(self.max_future_skew_secs))
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            max_age_secs: default_max_age(),
            max_future_skew_secs: default_max_future_skew(),
        }
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret", &"[REDACTED]")
            .field("max_age_secs", &self.max_age_secs)
            .field("max_future_skew_secs", &self.max_future_skew_secs)
            .finish()
    }
}

fn default_max_age() -> i64 {
    DEFAULT_MAX_AGE_SECS
}

fn default_max_future_skew() -> i64 {
    DEFAULT_MAX_FUTURE_SKEW_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> WebhookConfig {
        WebhookConfig {
            secret: "whsec_xxx".to_string(),
            max_age_secs: 300,
            max_future_skew_secs: 60,
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = WebhookConfig {
            secret: String::new(),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_zero_max_age() {
        let config = WebhookConfig {
            max_age_secs: 0,
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxAge)
        ));
    }

    #[test]
    fn test_validation_negative_skew() {
        let config = WebhookConfig {
            max_future_skew_secs: -1,
            ..valid()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_verifier_carries_policy() {
        let config = WebhookConfig {
            max_age_secs: 120,
            max_future_skew_secs: 5,
            ..valid()
        };
        let verifier = config.verifier().unwrap();
        assert_eq!(verifier.max_age_secs(), 120);
        assert_eq!(verifier.max_future_skew_secs(), 5);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let printed = format!("{:?}", valid());
        assert!(!printed.contains("whsec_xxx"));
    }
}
