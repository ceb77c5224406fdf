//! Diagram Module
//!
//! Server-side storage of the single shared BPMN diagram:
//!
//! - **`state`** - `DiagramStore`, the lock-guarded diagram value
//! - **`handlers`** - GET /get-diagram and POST /save-diagram
//!
//! # Example
//!
//! ```rust
//! use bpmn_collab::backend::diagram::DiagramStore;
//!
//! # async fn example() {
//! let store = DiagramStore::new();
//! let size = store.save("<bpmn:definitions/>".to_string()).await.unwrap();
//! assert_eq!(size, 19);
//! # }
//! ```

/// Diagram storage
pub mod state;

/// HTTP handlers for the diagram
pub mod handlers;

/// Re-export commonly used types
pub use handlers::{get_diagram, save_diagram};
pub use state::DiagramStore;
