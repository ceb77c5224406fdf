//! Application configuration module
//!
//! Transport-level settings for the server: where to listen, which origins
//! may call it, how large a request body may be, and which decrement policy
//! the user counter follows. The state components never read the
//! environment themselves; they receive what they need at construction.

use crate::shared::diagram::MAX_DIAGRAM_BYTES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default request body limit, leaving room for JSON escaping of a
/// maximum-size diagram
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 32 * 1024 * 1024;

/// Behaviour of a user decrement when the count is already zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecrementPolicy {
    /// Decrement at zero is a no-op that returns 0
    #[default]
    Lenient,
    /// Decrement at zero fails with `CounterError::Underflow`
    Strict,
}

impl FromStr for DecrementPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::InvalidValue {
                key: "USER_DECREMENT_POLICY",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DecrementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
    /// Decrement policy for the user counter
    pub decrement_policy: DecrementPolicy,
    /// Maximum accepted request body in bytes
    pub max_request_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
            decrement_policy: DecrementPolicy::default(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Build the configuration from process environment variables
    ///
    /// Reads `SERVER_HOST`, `SERVER_PORT`, `CORS_ORIGINS`,
    /// `USER_DECREMENT_POLICY` and `MAX_REQUEST_BYTES`. Unset variables keep
    /// their defaults. The result is validated before it is returned.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "SERVER_PORT",
                    value: port.clone(),
                })?;
            builder = builder.port(port);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            builder = builder.cors_origins(parse_origins(&origins));
        }
        if let Some(policy) = lookup("USER_DECREMENT_POLICY") {
            builder = builder.decrement_policy(policy.parse()?);
        }
        if let Some(limit) = lookup("MAX_REQUEST_BYTES") {
            let limit = limit
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "MAX_REQUEST_BYTES",
                    value: limit.clone(),
                })?;
            builder = builder.max_request_bytes(limit);
        }

        builder.build()
    }

    /// Socket address string, `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("SERVER_HOST"));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: self.port.to_string(),
            });
        }
        if self.max_request_bytes < MAX_DIAGRAM_BYTES {
            return Err(ConfigError::InvalidValue {
                key: "MAX_REQUEST_BYTES",
                value: self.max_request_bytes.to_string(),
            });
        }
        for origin in &self.cors_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(origin.clone()));
            }
        }
        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    cors_origins: Vec<String>,
    decrement_policy: Option<DecrementPolicy>,
    max_request_bytes: Option<usize>,
}

impl AppConfigBuilder {
    /// Set the listen host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Replace the allowed CORS origins
    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Add one allowed CORS origin
    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origins.push(origin.into());
        self
    }

    pub fn decrement_policy(mut self, policy: DecrementPolicy) -> Self {
        self.decrement_policy = Some(policy);
        self
    }

    pub fn max_request_bytes(mut self, limit: usize) -> Self {
        self.max_request_bytes = Some(limit);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            cors_origins: self.cors_origins,
            decrement_policy: self.decrement_policy.unwrap_or(defaults.decrement_policy),
            max_request_bytes: self.max_request_bytes.unwrap_or(defaults.max_request_bytes),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
