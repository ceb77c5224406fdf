//! BPMN Collab - Main Library
//!
//! A small shared-state HTTP backend for one collaborative BPMN diagram.
//! It stores a single diagram (BPMN XML) and a count of active users, and
//! exposes both over a JSON API consumed by a browser modeler. State lives
//! in memory only; clients poll or call endpoints directly.
//!
//! # Module Structure
//!
//! - **`shared`** - Transport-agnostic code
//!   - Diagram validation pipeline
//!   - Error types
//!   - Request/response payloads
//!   - Configuration
//!
//! - **`backend`** - Server-side code (only compiled with `server` feature)
//!   - `DiagramStore` and `UserCounter`
//!   - Axum handlers, router and error responses
//!   - Server initialization
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Axum server, CORS and tracing layers
//!
//! # Usage
//!
//! ```rust,no_run
//! use bpmn_collab::backend::server::create_app;
//! use bpmn_collab::shared::AppConfig;
//!
//! # async fn example() {
//! let app = create_app(&AppConfig::default());
//! // Use app with axum::serve
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The diagram and the user count each sit behind their own lock and are
//! shared between handlers as cloned handles. Writes to either are
//! all-or-nothing: a rejected request never changes state.
//!
//! # Error Handling
//!
//! - `shared::error` - `DiagramError`, `CounterError`
//! - `backend::error` - `BackendError`, mapped to HTTP status codes

/// Shared types and validation
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;
