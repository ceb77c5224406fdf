/**
 * Diagram Handlers
 *
 * - GET /get-diagram - Return the current diagram (or null)
 * - POST /save-diagram - Validate and replace the diagram
 */

use crate::backend::diagram::state::DiagramStore;
use crate::backend::error::BackendError;
use crate::shared::payload::{DiagramRequest, DiagramResponse, SaveDiagramResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

/// Handle GET /get-diagram
pub async fn get_diagram(State(store): State<DiagramStore>) -> Json<DiagramResponse> {
    let diagram = store.get().await;
    tracing::debug!(
        "[Diagram] Read diagram ({} bytes)",
        diagram.as_ref().map_or(0, String::len)
    );
    Json(DiagramResponse { diagram })
}

/// Handle POST /save-diagram
///
/// Body: `{"new_diagram": "<bpmn:definitions>...</bpmn:definitions>"}`.
/// Validation failures come back as 400, or 413 for oversized diagrams.
pub async fn save_diagram(
    State(store): State<DiagramStore>,
    payload: Result<Json<DiagramRequest>, JsonRejection>,
) -> Result<Json<SaveDiagramResponse>, BackendError> {
    let Json(request) = payload?;
    let size = store.save(request.new_diagram).await?;

    Ok(Json(SaveDiagramResponse {
        status: "saved".to_string(),
        size,
    }))
}
