//! Users Module
//!
//! Tracks the number of browser sessions currently editing the diagram.
//!
//! - **`state`** - `UserCounter`, bounded between 0 and `MAX_ACTIVE_USERS`
//! - **`handlers`** - add, delete, read and cleanup endpoints

/// Active user counter
pub mod state;

/// HTTP handlers for the counter
pub mod handlers;

pub use handlers::{add_user, cleanup_user, delete_user, get_user_count};
pub use state::{CleanupOutcome, UserCounter, MAX_ACTIVE_USERS};
