//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only GET API consumed by a browser front end on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Day views
        .route("/days", get(handlers::list_days))
        .route("/days/{date}/overview", get(handlers::get_day_overview))
        .route("/competition", get(handlers::get_competition))
        // Program views
        .route("/programs/{slug}", get(handlers::get_program))
        .route("/programs/{slug}/trend", get(handlers::get_program_trend))
        .route("/programs/{slug}/history", get(handlers::get_program_history));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(all(test, feature = "memory-api"))]
mod tests {
    use super::*;
    use crate::client::{AudienceApi, InMemoryApi};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let api = Arc::new(InMemoryApi::new()) as Arc<dyn AudienceApi>;
        let state = AppState::new(api, "memory://");
        let _router = create_router(state);
    }
}
