//! HTTP API surface.

mod exchange;
mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// Build the application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", exchange::router().merge(health::router()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
