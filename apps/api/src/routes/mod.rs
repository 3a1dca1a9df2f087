pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::kit::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Kit API
        .route("/api/v1/kits/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/kits/export/html",
            post(handlers::handle_export_html),
        )
        .route(
            "/api/v1/kits/export/markdown",
            post(handlers::handle_export_markdown),
        )
        .with_state(state)
}
