//! Backend Module
//!
//! This module contains all server-side code: the two shared state
//! components and the Axum HTTP layer that exposes them.
//!
//! # Architecture
//!
//! - **`diagram`** - `DiagramStore` and its handlers
//! - **`users`** - `UserCounter` and its handlers
//! - **`server`** - Application state, configuration loading, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── diagram/        - Shared diagram storage
//! ├── users/          - Active user counter
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! - `DiagramStore` guards its value with a `tokio::sync::RwLock`
//! - `UserCounter` guards its value with a `tokio::sync::Mutex`
//! - The two locks are independent; no operation needs both
//!
//! This module is only compiled when the `server` feature is enabled.

/// Shared diagram storage
pub mod diagram;

/// Active user counter
pub mod users;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use diagram::DiagramStore;
pub use error::BackendError;
pub use server::{create_app, AppState};
pub use users::UserCounter;
