pub mod dispatch;
pub mod gateway;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(dispatch::router())
        .merge(gateway::router())
        .with_state(state)
}
