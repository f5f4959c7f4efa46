pub mod analyze;
pub mod health;

use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze-resume", post(analyze::handle_analyze))
        // Everything else is the static frontend; ServeDir resolves "/" to
        // index.html and returns 404 for unknown paths.
        .fallback_service(static_files)
        .with_state(state)
}
