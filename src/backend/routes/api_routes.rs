/**
 * API Route Handlers
 *
 * This module wires the diagram and user counter endpoints.
 *
 * # Routes
 *
 * ## Diagram
 * - `GET /get-diagram` - Current diagram
 * - `POST /save-diagram` - Replace the diagram
 *
 * ## Users
 * - `POST /add-user` - Increment the active user count
 * - `DELETE /delete-user` - Decrement the active user count
 * - `GET /user-count` - Read the active user count
 * - `POST /cleanup-user` - Best-effort decrement on page unload
 *
 * ## Health
 * - `GET /health` - Liveness probe
 */

use crate::backend::diagram::{get_diagram, save_diagram};
use crate::backend::server::health::health_check;
use crate::backend::server::state::AppState;
use crate::backend::users::{add_user, cleanup_user, delete_user, get_user_count};
use axum::routing::{delete, get, post};
use axum::Router;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Diagram endpoints
        .route("/get-diagram", get(get_diagram))
        .route("/save-diagram", post(save_diagram))
        // User counter endpoints
        .route("/add-user", post(add_user))
        .route("/delete-user", delete(delete_user))
        .route("/user-count", get(get_user_count))
        .route("/cleanup-user", post(cleanup_user))
        // Health
        .route("/health", get(health_check))
}
