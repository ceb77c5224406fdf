//! Routes Module
//!
//! HTTP route configuration:
//!
//! - **`router`** - Main router assembly, layers and fallback
//! - **`api_routes`** - Diagram, user counter and health endpoints

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
