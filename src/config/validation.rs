//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the bind address parses as a socket address
//! - Validate the upstream URL parses and uses an HTTP(S) scheme
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    /// The listener bind address is not a valid socket address.
    InvalidBindAddress { value: String, reason: String },
    /// The upstream URL is missing, unparseable, or not HTTP(S).
    InvalidUpstreamUrl { value: String, reason: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress { value, reason } => {
                write!(f, "invalid bind address '{}': {}", value, reason)
            }
            ValidationError::InvalidUpstreamUrl { value, reason } => {
                write!(f, "invalid upstream URL '{}': {}", value, reason)
            }
        }
    }
}

/// Validate a loaded configuration, collecting every failure.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::InvalidBindAddress {
            value: config.listener.bind_address.clone(),
            reason: e.to_string(),
        });
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUpstreamUrl {
            value: config.upstream.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            value: config.upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_bind_address() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidBindAddress { .. }
        ));
    }

    #[test]
    fn rejects_non_http_upstream() {
        let mut config = GatewayConfig::default();
        config.upstream.url = "ftp://pacs.example".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidUpstreamUrl { .. }
        ));
    }

    #[test]
    fn collects_every_failure() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "nope".to_string();
        config.upstream.url = "also nope".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
