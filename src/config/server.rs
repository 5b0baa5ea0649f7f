//! Listener settings for the `wordgate-webhook-receiver` binary.
//!
//! Read from `WORDGATE__SERVER__*` variables.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Where the receiver listens and how it logs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the receiver binds (`WORDGATE__SERVER__HOST`)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port WordGate delivers webhooks to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; production switches logs to JSON
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on handling one delivery, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Deployment environment of the receiver
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Address handed to the tokio listener
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost)
    }

    /// Production receivers emit JSON logs
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate listener settings before binding
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,wordgate=debug,tower_http=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
