//! Shared Module
//!
//! This module contains the transport-agnostic parts of the service: the
//! diagram validation pipeline, the error taxonomy, the JSON payloads the
//! browser client exchanges with the server, and configuration.
//!
//! # Overview
//!
//! Nothing in here depends on axum, so the validation rules and payload
//! types can be reused by any client or alternative transport.

/// Diagram validation pipeline
pub mod diagram;

/// Shared error types
pub mod error;

/// Request and response payloads
pub mod payload;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, DecrementPolicy};
pub use diagram::{validate_diagram, MAX_DIAGRAM_BYTES};
pub use error::{CounterError, DiagramError};
