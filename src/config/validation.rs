//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes, hosts, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config value
//! - Runs before a config is accepted by the server or harness

use crate::config::schema::{ClientTimeoutConfig, ServerConfig};

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Status code outside the valid HTTP range (100..=599).
    StatusCodeOutOfRange(u16),
    /// Content type must be non-empty.
    EmptyContentType,
    /// Bind host must be non-empty.
    EmptyBindHost,
    /// A client timeout of zero can never be satisfied.
    ZeroClientTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::StatusCodeOutOfRange(code) => {
                write!(f, "status code {} outside 100..=599", code)
            }
            ValidationError::EmptyContentType => write!(f, "content type is empty"),
            ValidationError::EmptyBindHost => write!(f, "bind host is empty"),
            ValidationError::ZeroClientTimeout => write!(f, "client timeout is zero"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a server config before binding.
pub fn validate_server_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !(100..=599).contains(&config.status_code) {
        errors.push(ValidationError::StatusCodeOutOfRange(config.status_code));
    }
    if config.content_type.trim().is_empty() {
        errors.push(ValidationError::EmptyContentType);
    }
    if config.bind_host.trim().is_empty() {
        errors.push(ValidationError::EmptyBindHost);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a per-attempt client timeout config.
pub fn validate_client_config(config: &ClientTimeoutConfig) -> Result<(), Vec<ValidationError>> {
    if config.timeout_ms == 0 {
        return Err(vec![ValidationError::ZeroClientTimeout]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientKind;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_server_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn out_of_range_status_code_is_rejected() {
        let config = ServerConfig {
            status_code: 99,
            ..ServerConfig::default()
        };
        let errors = validate_server_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::StatusCodeOutOfRange(99)]);
    }

    #[test]
    fn all_errors_are_collected() {
        let config = ServerConfig {
            status_code: 600,
            content_type: "".to_string(),
            bind_host: "  ".to_string(),
            ..ServerConfig::default()
        };
        let errors = validate_server_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn zero_client_timeout_is_rejected() {
        let config = ClientTimeoutConfig {
            timeout_ms: 0,
            client_kind: ClientKind::Reqwest,
        };
        assert!(validate_client_config(&config).is_err());
    }
}
