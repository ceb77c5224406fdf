/**
 * Server Initialization
 *
 * This module builds the Axum application: it constructs the two state
 * components exactly once and hands them to the router.
 *
 * # Initialization Process
 *
 * 1. Create the diagram store (empty)
 * 2. Create the user counter (zero, with the configured decrement policy)
 * 3. Wrap both in `AppState`
 * 4. Create and configure the router
 */

use crate::backend::diagram::state::DiagramStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::backend::users::state::UserCounter;
use crate::shared::config::AppConfig;
use axum::Router;

/// Create and configure the Axum application
///
/// # Example
///
/// ```rust,no_run
/// use bpmn_collab::backend::server::create_app;
/// use bpmn_collab::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::default();
/// let app = create_app(&config);
/// let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```
pub fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing BPMN collaboration backend");

    let app_state = create_state(config);

    tracing::info!(
        "Diagram store and user counter initialized (decrement policy: {})",
        app_state.users.policy()
    );

    create_router(app_state, config)
}

/// Build the process-wide state from the configuration
pub fn create_state(config: &AppConfig) -> AppState {
    AppState::new(
        DiagramStore::new(),
        UserCounter::with_policy(config.decrement_policy),
    )
}
