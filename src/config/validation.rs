//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the home route is a usable redirect target
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field}: {value:?} is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("listener.max_connections must be greater than zero")]
    ZeroConnections,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("router.home_path must be an absolute path without query or fragment, got {0:?}")]
    InvalidHomePath(String),

    #[error("router.home_view must not be empty")]
    EmptyHomeView,

    #[error("invalid observability.log_level: {0:?}")]
    InvalidLogLevel(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::ZeroConnections);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !is_valid_home_path(&config.router.home_path) {
        errors.push(ValidationError::InvalidHomePath(config.router.home_path.clone()));
    }
    if config.router.home_view.trim().is_empty() {
        errors.push(ValidationError::EmptyHomeView);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.observability.log_level.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// An absolute, same-origin path with no query, fragment or control characters.
/// Non-ASCII is allowed; it is percent-encoded on the way out.
fn is_valid_home_path(home: &str) -> bool {
    home.starts_with('/')
        && !home.starts_with("//")
        && !home.contains(['?', '#'])
        && !home.chars().any(|c| c.is_whitespace() || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not an address".into();
        config.listener.max_connections = 0;
        config.timeouts.request_secs = 0;
        config.router.home_path = "//evil.example".into();
        config.router.home_view = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroConnections));
        assert!(errors.contains(&ValidationError::InvalidHomePath("//evil.example".into())));
    }

    #[test]
    fn test_relative_home_path() {
        let mut config = AppConfig::default();
        config.router.home_path = "dashboard".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidHomePath("dashboard".into())])
        );
    }

    #[test]
    fn test_home_path_rejects_query_fragment_and_controls() {
        for home in ["/dashboard?tab=1", "/a#b", "/\u{1}", "/a\u{7f}", "/a\tb"] {
            let mut config = AppConfig::default();
            config.router.home_path = home.into();
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::InvalidHomePath(home.into())]),
                "{home:?}"
            );
        }
    }

    #[test]
    fn test_home_path_allows_non_ascii() {
        let mut config = AppConfig::default();
        config.router.home_path = "/tableau-de-bord-é".into();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert_eq!(validate_config(&config), Ok(()));
    }
}
