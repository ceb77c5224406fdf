/**
 * Server Configuration
 *
 * This module loads the server configuration at startup.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (optionally populated
 * from a `.env` file by the binary), with defaults suitable for local
 * development.
 *
 * # Error Handling
 *
 * Unlike request-time failures, a bad configuration value stops startup:
 * the error is logged and returned to the caller.
 */

use crate::shared::config::{AppConfig, ConfigError};

/// Load and validate the configuration from the environment
///
/// # Errors
///
/// Returns the first `ConfigError` encountered.
///
/// # Example
///
/// ```rust,no_run
/// use bpmn_collab::backend::server::config::load_config;
///
/// let config = load_config().expect("invalid configuration");
/// println!("listening on {}", config.bind_address());
/// ```
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match AppConfig::from_env() {
        Ok(config) => {
            if config.cors_origins.is_empty() {
                tracing::warn!("CORS_ORIGINS not set. Requests from any origin will be allowed.");
            } else {
                tracing::info!("Allowed CORS origins: {}", config.cors_origins.join(", "));
            }
            tracing::info!(
                "Configuration loaded: bind={}, decrement_policy={}, max_request_bytes={}",
                config.bind_address(),
                config.decrement_policy,
                config.max_request_bytes
            );
            Ok(config)
        }
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DecrementPolicy;
    use serial_test::serial;

    const KEYS: [&str; 5] = [
        "SERVER_HOST",
        "SERVER_PORT",
        "CORS_ORIGINS",
        "USER_DECREMENT_POLICY",
        "MAX_REQUEST_BYTES",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults_from_empty_env() {
        clear_env();
        let config = load_config().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        std::env::set_var("SERVER_PORT", "8123");
        std::env::set_var("USER_DECREMENT_POLICY", "strict");
        let config = load_config().unwrap();
        clear_env();

        assert_eq!(config.port, 8123);
        assert_eq!(config.decrement_policy, DecrementPolicy::Strict);
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_value() {
        clear_env();
        std::env::set_var("MAX_REQUEST_BYTES", "lots");
        let result = load_config();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "MAX_REQUEST_BYTES", .. })
        ));
    }
}
