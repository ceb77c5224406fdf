/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds the two process-wide state components:
 * - `DiagramStore` - the shared BPMN diagram
 * - `UserCounter` - the active user count
 *
 * Both are constructed once in `create_app` and cloned into every request
 * as handles; they never share a lock and never call each other.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let a handler ask for only the component
 * it works on, e.g. `State(store): State<DiagramStore>`.
 */

use crate::backend::diagram::state::DiagramStore;
use crate::backend::users::state::UserCounter;
use axum::extract::FromRef;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single shared diagram
    pub diagram: DiagramStore,

    /// The active user counter
    pub users: UserCounter,
}

impl AppState {
    pub fn new(diagram: DiagramStore, users: UserCounter) -> Self {
        Self { diagram, users }
    }
}

/// Implement FromRef for DiagramStore
///
/// This allows Axum handlers to extract `DiagramStore` directly
/// from `AppState` using `State(DiagramStore)`.
impl FromRef<AppState> for DiagramStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.diagram.clone()
    }
}

/// Implement FromRef for UserCounter
impl FromRef<AppState> for UserCounter {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}
