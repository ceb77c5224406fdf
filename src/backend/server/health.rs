/**
 * Health Check
 *
 * Liveness probe reporting the active user count and the stored diagram
 * size alongside a timestamp.
 */

use crate::backend::server::state::AppState;
use crate::shared::payload::HealthResponse;
use axum::{extract::State, Json};

/// Handle GET /health
///
/// Reads both state components; never fails.
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        user_count: app_state.users.get().await,
        diagram_bytes: app_state.diagram.size().await,
    })
}
