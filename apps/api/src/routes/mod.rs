pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::taxonomy::handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/taxonomy/options",
            get(handlers::handle_get_options),
        )
        .route(
            "/api/v1/taxonomy/generate",
            post(handlers::handle_generate),
        )
        .fallback(not_found)
        .with_state(state)
}
