/**
 * User Counter Handlers
 *
 * - POST /add-user - Register an active user
 * - DELETE /delete-user - Remove an active user
 * - GET /user-count - Read the count
 * - POST /cleanup-user - Best-effort removal sent on page unload
 */

use crate::backend::error::BackendError;
use crate::backend::users::state::UserCounter;
use crate::shared::payload::{CleanupResponse, UserChangeResponse, UserCountResponse};
use axum::{extract::State, Json};

/// Handle POST /add-user
///
/// Returns 429 once the active user limit is reached.
pub async fn add_user(
    State(users): State<UserCounter>,
) -> Result<Json<UserChangeResponse>, BackendError> {
    let user_count = users.increment().await?;
    Ok(Json(UserChangeResponse {
        status: "added".to_string(),
        user_count,
    }))
}

/// Handle DELETE /delete-user
///
/// At zero this succeeds with 0 under the lenient policy and returns 400
/// under the strict one.
pub async fn delete_user(
    State(users): State<UserCounter>,
) -> Result<Json<UserChangeResponse>, BackendError> {
    let user_count = users.decrement().await?;
    Ok(Json(UserChangeResponse {
        status: "deleted".to_string(),
        user_count,
    }))
}

/// Handle GET /user-count
pub async fn get_user_count(State(users): State<UserCounter>) -> Json<UserCountResponse> {
    Json(UserCountResponse {
        user_count: users.get().await,
    })
}

/// Handle POST /cleanup-user
pub async fn cleanup_user(State(users): State<UserCounter>) -> Json<CleanupResponse> {
    let outcome = users.cleanup().await;
    let status = if outcome.cleaned { "cleaned" } else { "unchanged" };
    Json(CleanupResponse {
        status: status.to_string(),
        user_count: outcome.count,
        cleaned: outcome.cleaned,
    })
}
