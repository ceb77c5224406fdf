//! Server Module
//!
//! This module contains the code that turns a configuration into a running
//! Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading from the environment
//! ├── health.rs       - Liveness endpoint
//! └── init.rs         - State construction and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds one `DiagramStore` and one `UserCounter`. Both are
//! cheap handles around their own lock, so cloning the state into each
//! request shares the same underlying values.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Health endpoint
pub mod health;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_state};
pub use state::AppState;
