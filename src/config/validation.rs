//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, redirect limit > 0)
//! - Check the server URL and API path shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.base_url '{0}' is not a valid URL")]
    InvalidBaseUrl(String),

    #[error("server.base_url scheme '{0}' is not http or https")]
    UnsupportedScheme(String),

    #[error("server.api_path '{0}' must start with '/'")]
    RelativeApiPath(String),

    #[error("server.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("navigation.max_redirects must be greater than zero")]
    ZeroRedirectLimit,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.server.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::InvalidBaseUrl(config.server.base_url.clone())),
    }

    if !config.server.api_path.starts_with('/') {
        errors.push(ValidationError::RelativeApiPath(config.server.api_path.clone()));
    }

    if config.server.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.navigation.max_redirects == 0 {
        errors.push(ValidationError::ZeroRedirectLimit);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
